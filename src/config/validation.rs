//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Endpoint names present and unique, URLs parse as http/https
//! - Alert topic present
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HealthCheckConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use url::Url;

use crate::config::schema::HealthCheckConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("no endpoints configured")]
    NoEndpoints,

    #[error("endpoint #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate endpoint name '{name}'")]
    DuplicateName { name: String },

    #[error("endpoint '{name}' has invalid url '{url}': {reason}")]
    InvalidUrl { name: String, url: String, reason: String },

    #[error("notifier.topic_arn is empty")]
    MissingTopic,
}

pub fn validate_config(config: &HealthCheckConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.endpoints.is_empty() {
        errors.push(ValidationError::NoEndpoints);
    }

    let mut seen = HashSet::new();
    for (index, endpoint) in config.endpoints.iter().enumerate() {
        if endpoint.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !seen.insert(endpoint.name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                name: endpoint.name.clone(),
            });
        }

        let reason = match Url::parse(&endpoint.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => None,
            Ok(url) => Some(format!("unsupported scheme '{}'", url.scheme())),
            Err(e) => Some(e.to_string()),
        };
        if let Some(reason) = reason {
            errors.push(ValidationError::InvalidUrl {
                name: endpoint.name.clone(),
                url: endpoint.url.clone(),
                reason,
            });
        }
    }

    if config.notifier.topic_arn.trim().is_empty() {
        errors.push(ValidationError::MissingTopic);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
