//! Crate-level error type.

use crate::config::ConfigError;
use crate::notify::PublishError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error("failed to read event payload: {0}")]
    Event(String),
}
