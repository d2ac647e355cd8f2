//! AWS SNS publisher.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::config::Region;
use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::Client;

use crate::config::NotifierConfig;
use crate::notify::alert::Alert;
use crate::notify::publisher::{PublishError, Publisher};

/// Publishes alerts to one SNS topic.
///
/// The client is created once per run and shared by every alert.
#[derive(Clone)]
pub struct SnsPublisher {
    client: Client,
    topic_arn: String,
}

impl SnsPublisher {
    /// Build the SNS client from the SDK's default provider chain.
    pub async fn from_config(config: &NotifierConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_sns::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        tracing::debug!(topic_arn = %config.topic_arn, "SNS publisher ready");

        Self::new(Client::from_conf(builder.build()), config.topic_arn.clone())
    }

    pub fn new(client: Client, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }
}

#[async_trait]
impl Publisher for SnsPublisher {
    async fn publish(&self, alert: &Alert) -> Result<(), PublishError> {
        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(&alert.body)
            .subject(&alert.subject)
            .send()
            .await
            .map_err(|e| PublishError::Delivery {
                topic: self.topic_arn.clone(),
                reason: DisplayErrorContext(e).to_string(),
            })?;

        tracing::debug!(message_id = ?output.message_id(), "SNS publish accepted");
        Ok(())
    }
}
