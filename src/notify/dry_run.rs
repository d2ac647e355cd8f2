//! Dry-run publisher.

use async_trait::async_trait;

use crate::notify::alert::Alert;
use crate::notify::publisher::{PublishError, Publisher};

/// Logs alerts instead of sending them. Used with `--dry-run`.
#[derive(Debug, Clone, Default)]
pub struct LogPublisher {
    topic: String,
}

impl LogPublisher {
    pub fn new(topic: impl Into<String>) -> Self {
        Self { topic: topic.into() }
    }
}

#[async_trait]
impl Publisher for LogPublisher {
    async fn publish(&self, alert: &Alert) -> Result<(), PublishError> {
        tracing::info!(
            topic = %self.topic,
            subject = %alert.subject,
            body = %alert.body,
            "Dry run: alert not sent"
        );
        Ok(())
    }
}
