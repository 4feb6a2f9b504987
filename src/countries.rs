//! Fixed list of countries offered by the service.

use serde::Serialize;

/// A supported country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

/// Countries listed by `/` and `/api/countries`, in display order.
pub const COUNTRIES: [Country; 5] = [
    Country { code: "US", name: "United States" },
    Country { code: "IN", name: "India" },
    Country { code: "GB", name: "United Kingdom" },
    Country { code: "CA", name: "Canada" },
    Country { code: "AU", name: "Australia" },
];
