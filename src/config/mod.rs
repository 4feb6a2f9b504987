//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → schema.rs (environment: CALENDARIFIC_API_KEY, bind address)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the API key is read once at startup
//! - All fields have defaults to allow minimal (or no) config files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, ServiceConfig, TimeoutConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
