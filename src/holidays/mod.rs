//! Holiday proxy subsystem.
//!
//! # Data Flow
//! ```text
//! GET /api/holidays?country=&year=
//!     → types.rs (HolidayQuery from query pairs)
//!     → service.rs (presence check → API key check)
//!     → client.rs (one upstream GET, 10s timeout)
//!     → types.rs (response.holidays → SimplifiedHoliday)
//!     → error.rs (failures → status + JSON body)
//! ```
//!
//! # Design Decisions
//! - The upstream sits behind the `HolidaySource` trait so tests can swap it
//! - Missing upstream fields become null, never errors
//! - Timeouts map to 504, other transport failures to 502

pub mod client;
pub mod error;
pub mod service;
pub mod types;

pub use client::{CalendarificClient, HolidaySource};
pub use error::{HolidayError, UpstreamError};
pub use service::HolidayService;
pub use types::{HolidayQuery, SimplifiedHoliday, UpstreamHoliday, UpstreamPayload};
