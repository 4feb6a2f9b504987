//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, timeout, trace layers)
//!     → handlers.rs (index, countries, holidays, metrics, health)
//!     → holidays service (validate → upstream → reshape)
//!     → response with x-request-id
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer, ServerError};
