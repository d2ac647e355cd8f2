//! Scheduled HTTP health checks with pub/sub alerting.

pub mod config;
pub mod error;
pub mod health;
pub mod lifecycle;
pub mod notify;
pub mod observability;

pub use config::HealthCheckConfig;
pub use error::Error;
pub use health::HealthProber;
pub use notify::Notifier;
