//! Publisher seam between the notifier and the pub/sub transport.

use async_trait::async_trait;

use crate::notify::alert::Alert;

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("failed to publish alert to {topic}: {reason}")]
    Delivery { topic: String, reason: String },
}

/// Delivers alerts to a single, fixed destination.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, alert: &Alert) -> Result<(), PublishError>;
}
