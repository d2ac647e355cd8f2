//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! prober, notifier, trigger
//!     → tracing events (endpoint, invocation id fields)
//!     → logging.rs subscriber
//!     → stderr (pretty for terminals, JSON for log aggregation)
//! ```

pub mod logging;

pub use logging::init_logging;
