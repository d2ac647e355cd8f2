//! Scheduled-trigger entry point.

use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::Error;
use crate::health::HealthProber;

/// Opaque per-invocation context supplied by the scheduler.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub invocation_id: Uuid,
}

impl InvocationContext {
    pub fn new() -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
        }
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one scheduled health check.
///
/// The event payload is accepted for interface compatibility and otherwise
/// ignored. Returns normally whether or not endpoints failed.
pub async fn handle(
    event: &Value,
    context: &InvocationContext,
    prober: &HealthProber,
) -> Result<(), Error> {
    let span = tracing::info_span!("invocation", id = %context.invocation_id);

    async {
        tracing::debug!(event = %event, "Invocation received");
        prober.run().await?;
        Ok::<(), Error>(())
    }
    .instrument(span)
    .await
}
