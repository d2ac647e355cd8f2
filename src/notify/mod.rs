//! Alert notification subsystem.
//!
//! # Data Flow
//! ```text
//! Failed probe
//!     → Notifier::notify(name, status_code, error)
//!     → alert.rs (subject + body)
//!     → Publisher (sns.rs in production, dry_run.rs for dry runs)
//!     → pub/sub topic
//! ```
//!
//! # Design Decisions
//! - The publisher is injected, never a process-wide client
//! - Publish failures propagate to the caller; there is no fallback channel
//! - No alert history or deduplication

pub mod alert;
pub mod dry_run;
pub mod publisher;
pub mod sns;

use std::sync::Arc;

pub use alert::{Alert, ALERT_SUBJECT};
pub use dry_run::LogPublisher;
pub use publisher::{PublishError, Publisher};
pub use sns::SnsPublisher;

/// Turns probe failures into alerts and hands them to a [`Publisher`].
#[derive(Clone)]
pub struct Notifier {
    publisher: Arc<dyn Publisher>,
}

impl Notifier {
    pub fn new(publisher: Arc<dyn Publisher>) -> Self {
        Self { publisher }
    }

    /// Publish one failure alert for `name`.
    ///
    /// Either detail may be absent; the prober supplies exactly one.
    pub async fn notify(
        &self,
        name: &str,
        status_code: Option<u16>,
        error: Option<&str>,
    ) -> Result<(), PublishError> {
        let alert = Alert::failure(name, status_code, error);
        self.publisher.publish(&alert).await?;
        tracing::debug!(endpoint = %name, subject = %alert.subject, "Alert published");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Alert>>);

    #[async_trait]
    impl Publisher for Recorder {
        async fn publish(&self, alert: &Alert) -> Result<(), PublishError> {
            self.0.lock().unwrap().push(alert.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_notify_publishes_formatted_alert() {
        let recorder = Arc::new(Recorder::default());
        let notifier = Notifier::new(recorder.clone());

        notifier.notify("Upload File", Some(503), None).await.unwrap();

        let alerts = recorder.0.lock().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].subject, ALERT_SUBJECT);
        assert_eq!(alerts[0].body, "HEALTH >> FAIL (Upload File) - Status Code: 503");
    }
}
