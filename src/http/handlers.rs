//! Route handlers.

use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::countries::{Country, COUNTRIES};
use crate::holidays::{HolidayError, HolidayQuery};
use crate::http::server::AppState;

/// Path of the holiday proxy endpoint, also used as the metrics label.
pub const HOLIDAYS_ENDPOINT: &str = "/api/holidays";

/// `GET /api/holidays?country=&year=`
///
/// Every outcome records exactly one metric sample carrying the status that
/// is returned. The lookup runs on its own task so the sample is recorded
/// even when the client goes away mid-request.
pub async fn holidays(
    State(state): State<AppState>,
    method: Method,
    RawQuery(raw): RawQuery,
) -> Response {
    let start = Instant::now();
    let query = HolidayQuery::from_pairs(url::form_urlencoded::parse(
        raw.as_deref().unwrap_or_default().as_bytes(),
    ));

    let metrics = state.metrics.clone();
    let task_method = method.clone();
    let task = tokio::spawn(async move {
        let response = lookup_response(&state, &query).await;
        record(&state, &task_method, response.status(), start);
        response
    });

    match task.await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "Holiday lookup task failed");
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            metrics.record_request(method.as_str(), HOLIDAYS_ENDPOINT, status.as_u16(), start);
            (status, Json(json!({ "error": "internal error" }))).into_response()
        }
    }
}

async fn lookup_response(state: &AppState, query: &HolidayQuery) -> Response {
    match state.holidays.lookup(query).await {
        Ok(list) => {
            tracing::debug!(
                country = ?query.country,
                year = ?query.year,
                count = list.len(),
                "Holidays fetched"
            );
            (StatusCode::OK, Json(list)).into_response()
        }
        Err(e) => {
            log_failure(query, &e);
            e.into_response()
        }
    }
}

fn record(state: &AppState, method: &Method, status: StatusCode, start: Instant) {
    state
        .metrics
        .record_request(method.as_str(), HOLIDAYS_ENDPOINT, status.as_u16(), start);
    tracing::info!(
        method = %method,
        endpoint = HOLIDAYS_ENDPOINT,
        status = status.as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Holiday request completed"
    );
}

fn log_failure(query: &HolidayQuery, error: &HolidayError) {
    match error {
        HolidayError::MissingParameters => {
            tracing::debug!(country = ?query.country, year = ?query.year, "Rejected holiday query");
        }
        HolidayError::ApiKeyNotConfigured => {
            tracing::warn!("Holiday query received but no upstream API key is configured");
        }
        HolidayError::Upstream(e) => {
            tracing::warn!(
                country = ?query.country,
                year = ?query.year,
                error = %e,
                "Upstream holiday lookup failed"
            );
        }
    }
}

/// `GET /api/countries`
pub async fn countries() -> Json<[Country; 5]> {
    Json(COUNTRIES)
}

/// `GET /`
pub async fn index() -> Html<String> {
    Html(render_index(&COUNTRIES))
}

/// `GET /metrics`
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

fn render_index(countries: &[Country]) -> String {
    let options: String = countries
        .iter()
        .map(|c| format!("        <option value=\"{}\">{} ({})</option>\n", c.code, c.name, c.code))
        .collect();
    let rows: String = countries
        .iter()
        .map(|c| format!("      <li><code>{}</code> {}</li>\n", c.code, c.name))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Public Holidays</title>
</head>
<body>
  <h1>Public Holidays</h1>
  <form id="lookup">
    <label>Country
      <select name="country">
{options}      </select>
    </label>
    <label>Year <input name="year" type="number" value="2024"></label>
    <button type="submit">Show holidays</button>
  </form>
  <section>
    <h2>Supported countries</h2>
    <ul>
{rows}    </ul>
  </section>
  <pre id="result"></pre>
  <script>
    document.getElementById("lookup").addEventListener("submit", async (event) => {{
      event.preventDefault();
      const params = new URLSearchParams(new FormData(event.target));
      const res = await fetch("{endpoint}?" + params);
      document.getElementById("result").textContent =
        JSON.stringify(await res.json(), null, 2);
    }});
  </script>
</body>
</html>
"#,
        endpoint = HOLIDAYS_ENDPOINT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lists_every_country() {
        let page = render_index(&COUNTRIES);
        for c in COUNTRIES {
            assert!(page.contains(&format!("<option value=\"{}\">", c.code)));
            assert!(page.contains(c.name));
        }
        assert!(page.contains("fetch(\"/api/holidays?\""));
    }
}
