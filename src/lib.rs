//! Public holiday lookup service.
//!
//! Serves a fixed country list, an HTML index page, and `/api/holidays`, a
//! proxy to the Calendarific holidays API that reshapes the upstream payload
//! and records request metrics.

pub mod config;
pub mod countries;
pub mod holidays;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
