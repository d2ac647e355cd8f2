//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → HealthCheckConfig (validated, immutable)
//!     → endpoints handed to the prober, notifier settings to the publisher
//! ```
//!
//! # Design Decisions
//! - Config is loaded once per invocation; there is no hot reload
//! - Endpoint order in the file is the probing order
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::EndpointConfig;
pub use schema::HealthCheckConfig;
pub use schema::LogFormat;
pub use schema::LoggingConfig;
pub use schema::NotifierConfig;
pub use validation::{validate_config, ValidationError};
