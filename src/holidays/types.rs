//! Holiday data types: the inbound query, the upstream payload and the
//! simplified records returned to callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters accepted by `/api/holidays`.
///
/// Values are kept as raw strings. Neither is parsed nor checked against a
/// known list; they are forwarded upstream untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayQuery {
    pub country: Option<String>,
    pub year: Option<String>,
}

impl HolidayQuery {
    /// Build a query from decoded `key=value` pairs. The first occurrence of a
    /// repeated key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "country" => &mut query.country,
                "year" => &mut query.year,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// Both parameters, when present and non-empty.
    pub fn required(&self) -> Option<(&str, &str)> {
        let country = self.country.as_deref().filter(|c| !c.is_empty())?;
        let year = self.year.as_deref().filter(|y| !y.is_empty())?;
        Some((country, year))
    }
}

/// Decoded body of a successful upstream response.
///
/// Kept as loose JSON: the upstream schema is only partially relied upon
/// and any missing level simply yields no holidays.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct UpstreamPayload(pub Value);

impl UpstreamPayload {
    /// Holiday records under `response.holidays`, or none when any level is
    /// absent or not an array.
    pub fn holidays(&self) -> impl Iterator<Item = UpstreamHoliday<'_>> {
        self.0
            .get("response")
            .and_then(|r| r.get("holidays"))
            .and_then(Value::as_array)
            .map(|list| list.as_slice())
            .unwrap_or_default()
            .iter()
            .map(UpstreamHoliday)
    }

    /// Reshape every upstream record.
    pub fn simplify(&self) -> Vec<SimplifiedHoliday> {
        self.holidays().map(SimplifiedHoliday::from).collect()
    }
}

/// Borrowed view of one upstream holiday record.
#[derive(Debug, Clone, Copy)]
pub struct UpstreamHoliday<'a>(pub &'a Value);

impl<'a> UpstreamHoliday<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.0.get("description").and_then(Value::as_str)
    }

    /// `date.iso`, e.g. `2024-01-01` or `2024-03-10T02:00:00-05:00`.
    pub fn iso_date(&self) -> Option<&'a str> {
        self.0
            .get("date")
            .and_then(|d| d.get("iso"))
            .and_then(Value::as_str)
    }

    /// `type` exactly as upstream sent it. A literal `null` counts as absent.
    pub fn kind(&self) -> Option<&'a Value> {
        self.0.get("type").filter(|v| !v.is_null())
    }
}

/// Caller-facing projection of an upstream holiday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedHoliday {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
}

impl From<UpstreamHoliday<'_>> for SimplifiedHoliday {
    fn from(h: UpstreamHoliday<'_>) -> Self {
        Self {
            name: h.name().map(str::to_owned),
            description: h.description().map(str::to_owned),
            date: h.iso_date().map(str::to_owned),
            kind: h.kind().cloned(),
        }
    }
}
