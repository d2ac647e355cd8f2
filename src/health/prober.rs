//! Sequential endpoint prober.
//!
//! # Responsibilities
//! - Probe every configured endpoint once per run, in order
//! - Log one outcome line per endpoint
//! - Forward each failure to the notifier
//!
//! The HTTP client keeps the transport default timeout; nothing is overridden.

use reqwest::Client;

use crate::health::endpoint::{Endpoint, ProbeOutcome, ProbeResult};
use crate::notify::{Notifier, PublishError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct HealthProber {
    endpoints: Vec<Endpoint>,
    client: Client,
    notifier: Notifier,
}

impl HealthProber {
    pub fn new(endpoints: Vec<Endpoint>, notifier: Notifier) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(endpoints, client, notifier))
    }

    pub fn with_client(endpoints: Vec<Endpoint>, client: Client, notifier: Notifier) -> Self {
        Self {
            endpoints,
            client,
            notifier,
        }
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Probe every endpoint and alert on each failure.
    ///
    /// Probe failures never abort the run. A failed publish does: it is
    /// returned immediately and the remaining endpoints are not probed.
    pub async fn run(&self) -> Result<(), PublishError> {
        tracing::debug!(endpoints = self.endpoints.len(), "Probe run starting");

        let mut failures = 0usize;
        for endpoint in &self.endpoints {
            let result = self.probe(endpoint).await;

            match &result.outcome {
                ProbeOutcome::Success { .. } => {
                    tracing::info!(endpoint = %endpoint.name, "{}", result);
                }
                ProbeOutcome::StatusFailure { status } => {
                    failures += 1;
                    tracing::warn!(endpoint = %endpoint.name, "{}", result);
                    self.notifier
                        .notify(&endpoint.name, Some(*status), None)
                        .await?;
                }
                ProbeOutcome::TransportFailure { error } => {
                    failures += 1;
                    tracing::warn!(endpoint = %endpoint.name, "{}", result);
                    self.notifier
                        .notify(&endpoint.name, None, Some(error.as_str()))
                        .await?;
                }
            }
        }

        tracing::debug!(
            endpoints = self.endpoints.len(),
            failures,
            "Probe run complete"
        );
        Ok(())
    }

    /// Issue a single GET against `endpoint` and classify the result.
    pub async fn probe<'a>(&self, endpoint: &'a Endpoint) -> ProbeResult<'a> {
        let outcome = match self.client.get(&endpoint.url).send().await {
            Ok(response) => ProbeOutcome::from_status(response.status().as_u16()),
            Err(e) => ProbeOutcome::from_transport_error(&e),
        };

        ProbeResult { endpoint, outcome }
    }
}
