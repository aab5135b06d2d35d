//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::ConfigError;
use super::models::*;
use crate::storage::filters::SortField;

/// Validate the entire configuration.
pub fn validate_config(config: &RankwellConfig) -> Result<(), ConfigError> {
    validate_search_config(&config.search)?;

    config
        .scoring
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("scoring: {}", e)))?;

    Ok(())
}

/// Validate search translation settings.
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    if config.document_type.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Document type cannot be empty".to_string(),
        ));
    }

    if config.status.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Status cannot be empty".to_string(),
        ));
    }

    if config.topic_taxonomy.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Topic taxonomy cannot be empty".to_string(),
        ));
    }

    if config.metadata_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Metadata key cannot be empty".to_string(),
        ));
    }

    for (token, spec) in &config.field_sorts {
        if token.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Field sort token cannot be empty".to_string(),
            ));
        }
        if let SortField::Meta(key) = &spec.field
            && key.trim().is_empty()
        {
            return Err(ConfigError::ValidationError(format!(
                "Field sort '{}' names an empty metadata key",
                token
            )));
        }
    }

    Ok(())
}
