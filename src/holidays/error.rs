//! Holiday lookup errors and their HTTP rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure talking to the upstream holiday API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a status other than 200.
    #[error("upstream returned status {status}")]
    Status { status: u16, body: String },

    /// No complete response within the configured timeout.
    #[error("upstream request timed out: {0}")]
    Timeout(String),

    /// Connection, DNS, TLS or body transfer failure.
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// A 200 response whose body was not JSON.
    #[error("upstream returned invalid JSON: {0}")]
    InvalidBody(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL carries the API key.
        let e = e.without_url();
        if e.is_timeout() {
            UpstreamError::Timeout(e.to_string())
        } else if e.is_decode() {
            UpstreamError::InvalidBody(e.to_string())
        } else {
            UpstreamError::Transport(e.to_string())
        }
    }
}

/// Every way a holiday lookup can fail.
#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("country and year query parameters are required")]
    MissingParameters,

    #[error("Calendarific API key not configured in CALENDARIFIC_API_KEY env var")]
    ApiKeyNotConfigured,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl HolidayError {
    /// Status code returned to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            HolidayError::MissingParameters => StatusCode::BAD_REQUEST,
            HolidayError::ApiKeyNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            HolidayError::Upstream(UpstreamError::Status { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            HolidayError::Upstream(UpstreamError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            HolidayError::Upstream(UpstreamError::Transport(_))
            | HolidayError::Upstream(UpstreamError::InvalidBody(_)) => StatusCode::BAD_GATEWAY,
        }
    }

    /// JSON body returned to the caller. Upstream text is embedded as an
    /// opaque string.
    pub fn body(&self) -> serde_json::Value {
        match self {
            HolidayError::MissingParameters | HolidayError::ApiKeyNotConfigured => {
                json!({ "error": self.to_string() })
            }
            HolidayError::Upstream(UpstreamError::Status { body, .. }) => json!({
                "error": "Calendarific API error",
                "details": body,
            }),
            HolidayError::Upstream(UpstreamError::Timeout(details)) => json!({
                "error": "Calendarific API timed out",
                "details": details,
            }),
            HolidayError::Upstream(UpstreamError::Transport(details)) => json!({
                "error": "Calendarific API unreachable",
                "details": details,
            }),
            HolidayError::Upstream(UpstreamError::InvalidBody(details)) => json!({
                "error": "Calendarific API returned invalid JSON",
                "details": details,
            }),
        }
    }
}

impl IntoResponse for HolidayError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
