//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the TOML file.
//!
//! ```toml
//! [notifier]
//! topic_arn = "arn:aws:sns:us-east-1:123456789012:HealthCheck"
//! region = "us-east-1"
//!
//! [[endpoints]]
//! name = "Upload File"
//! url = "http://10.0.0.12:3000/health"
//! ```

use serde::{Deserialize, Serialize};

/// Root configuration for a health check run.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HealthCheckConfig {
    /// Endpoints to probe, in probing order.
    pub endpoints: Vec<EndpointConfig>,

    /// Alert destination.
    pub notifier: NotifierConfig,

    /// Log output settings.
    pub logging: LoggingConfig,
}

/// A named service health URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// Display name used in log lines and alerts.
    pub name: String,

    /// URL probed with a single GET.
    pub url: String,
}

/// Pub/sub topic the alerts are published to.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// SNS topic ARN.
    pub topic_arn: String,

    /// AWS region override. Falls back to the SDK's provider chain.
    pub region: Option<String>,

    /// Custom SNS endpoint (e.g. LocalStack).
    pub endpoint_url: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,

    /// Filter directive used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
