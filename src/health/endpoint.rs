//! Endpoint and probe result types.

use std::error::Error as StdError;
use std::fmt;

use crate::config::EndpointConfig;
use crate::notify::alert::failure_line;

/// A named service health URL. Immutable for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub name: String,
    pub url: String,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl From<EndpointConfig> for Endpoint {
    fn from(config: EndpointConfig) -> Self {
        Self::new(config.name, config.url)
    }
}

/// Classification of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Responded with 200.
    Success { status: u16 },
    /// Responded with anything other than 200.
    StatusFailure { status: u16 },
    /// No response was received at all.
    TransportFailure { error: String },
}

impl ProbeOutcome {
    pub fn from_status(status: u16) -> Self {
        if status == 200 {
            ProbeOutcome::Success { status }
        } else {
            ProbeOutcome::StatusFailure { status }
        }
    }

    /// Render a transport error with its full source chain.
    pub fn from_transport_error(error: &(dyn StdError + 'static)) -> Self {
        let mut description = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !description.contains(&text) {
                description.push_str(": ");
                description.push_str(&text);
            }
            source = cause.source();
        }
        ProbeOutcome::TransportFailure { error: description }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProbeOutcome::StatusFailure { status } | ProbeOutcome::Success { status } => Some(*status),
            ProbeOutcome::TransportFailure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProbeOutcome::TransportFailure { error } => Some(error.as_str()),
            _ => None,
        }
    }
}

/// One probe of one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult<'a> {
    pub endpoint: &'a Endpoint,
    pub outcome: ProbeOutcome,
}

impl fmt::Display for ProbeResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ProbeOutcome::Success { .. } => write!(f, "HEALTH >> OK ({})", self.endpoint.name),
            ProbeOutcome::StatusFailure { status } => {
                f.write_str(&failure_line(&self.endpoint.name, Some(*status), None))
            }
            ProbeOutcome::TransportFailure { error } => {
                f.write_str(&failure_line(&self.endpoint.name, None, Some(error.as_str())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("error sending request")]
    struct Outer(#[source] Inner);

    #[derive(Debug, thiserror::Error)]
    #[error("Connection refused (os error 111)")]
    struct Inner;

    fn upload() -> Endpoint {
        Endpoint::new("Upload File", "http://host/health")
    }

    #[test]
    fn test_only_200_is_success() {
        assert!(ProbeOutcome::from_status(200).is_success());
        for status in [100, 201, 204, 301, 404, 503] {
            let outcome = ProbeOutcome::from_status(status);
            assert!(!outcome.is_success(), "{status} must be a failure");
            assert_eq!(outcome.status_code(), Some(status));
            assert_eq!(outcome.error(), None);
        }
    }

    #[test]
    fn test_transport_error_includes_sources() {
        let outcome = ProbeOutcome::from_transport_error(&Outer(Inner));
        assert_eq!(
            outcome.error(),
            Some("error sending request: Connection refused (os error 111)")
        );
        assert_eq!(outcome.status_code(), None);
    }

    #[test]
    fn test_log_lines() {
        let endpoint = upload();
        let line = |outcome| ProbeResult { endpoint: &endpoint, outcome }.to_string();

        assert_eq!(line(ProbeOutcome::from_status(200)), "HEALTH >> OK (Upload File)");
        assert_eq!(
            line(ProbeOutcome::from_status(503)),
            "HEALTH >> FAIL (Upload File) - Status Code: 503"
        );
        assert_eq!(
            line(ProbeOutcome::TransportFailure { error: "refused".into() }),
            "HEALTH >> FAIL (Upload File) - Error: refused"
        );
    }
}
