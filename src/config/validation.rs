//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Keep the upstream timeout inside the whole-request timeout
//! - Check the upstream URL is an absolute http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("upstream.base_url '{url}' is invalid: {reason}")]
    UpstreamUrl { url: String, reason: String },

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error(
        "timeouts.request_secs ({request_secs}) must be greater than upstream.timeout_secs ({upstream_secs})"
    )]
    RequestTimeoutTooShort { request_secs: u64, upstream_secs: u64 },

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    LogLevel(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match url::Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::UpstreamUrl {
            url: config.upstream.base_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::UpstreamUrl {
            url: config.upstream.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }
    // The request timeout layer drops the handler, so it must never beat the
    // upstream call's own timeout.
    let (upstream_secs, request_secs) = (config.upstream.timeout_secs, config.timeouts.request_secs);
    if upstream_secs > 0 && request_secs > 0 && upstream_secs >= request_secs {
        errors.push(ValidationError::RequestTimeoutTooShort {
            request_secs,
            upstream_secs,
        });
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.upstream.base_url = "ftp://calendarific.com/api".into();
        config.upstream.timeout_secs = 0;
        config.timeouts.request_secs = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors[0],
            ValidationError::BindAddress("not-an-address".into())
        );
        assert!(matches!(errors[1], ValidationError::UpstreamUrl { .. }));
        assert_eq!(
            errors[2],
            ValidationError::ZeroTimeout("upstream.timeout_secs")
        );
        assert_eq!(errors[3], ValidationError::ZeroTimeout("timeouts.request_secs"));
        assert_eq!(errors[4], ValidationError::LogLevel("loud".into()));
    }

    #[test]
    fn test_request_timeout_must_exceed_upstream_timeout() {
        let mut config = ServiceConfig::default();
        config.upstream.timeout_secs = 10;

        config.timeouts.request_secs = 1;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::RequestTimeoutTooShort {
                request_secs: 1,
                upstream_secs: 10,
            }]
        );

        config.timeouts.request_secs = 10;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("timeouts.request_secs (10)"));

        config.timeouts.request_secs = 11;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_relative_upstream_url_rejected() {
        let mut config = ServiceConfig::default();
        config.upstream.base_url = "/api/v2/holidays".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("upstream.base_url"));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = ServiceConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
