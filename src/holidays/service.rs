//! Holiday lookup pipeline: validate, check configuration, fetch, reshape.

use std::sync::Arc;

use crate::holidays::client::HolidaySource;
use crate::holidays::error::HolidayError;
use crate::holidays::types::{HolidayQuery, SimplifiedHoliday};

/// Proxies holiday queries to an upstream [`HolidaySource`].
#[derive(Clone)]
pub struct HolidayService {
    source: Arc<dyn HolidaySource>,
    api_key: String,
}

impl HolidayService {
    /// An empty `api_key` means the key is not configured.
    pub fn new(source: Arc<dyn HolidaySource>, api_key: impl Into<String>) -> Self {
        Self {
            source,
            api_key: api_key.into(),
        }
    }

    pub fn api_key_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Run one lookup. Parameter presence is checked before the key, and
    /// the upstream is only called when both checks pass.
    pub async fn lookup(&self, query: &HolidayQuery) -> Result<Vec<SimplifiedHoliday>, HolidayError> {
        let (country, year) = query.required().ok_or(HolidayError::MissingParameters)?;

        if !self.api_key_configured() {
            return Err(HolidayError::ApiKeyNotConfigured);
        }

        let payload = self
            .source
            .fetch_holidays(country, year, &self.api_key)
            .await?;

        Ok(payload.simplify())
    }
}
