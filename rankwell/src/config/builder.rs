//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use crate::models::TermField;
use crate::search::WeightingConfig;
use crate::storage::filters::SortSpec;
use std::path::Path;

/// Builder for creating RankwellConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: RankwellConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: RankwellConfig::default(),
        }
    }

    /// Restrict searches to a content type.
    pub fn with_document_type(mut self, document_type: impl Into<String>) -> Self {
        self.config.search.document_type = document_type.into();
        self
    }

    /// Restrict searches to a publication status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.config.search.status = status.into();
        self
    }

    /// Set the taxonomy and term field that request topics refer to.
    pub fn with_topic_taxonomy(mut self, taxonomy: impl Into<String>, field: TermField) -> Self {
        self.config.search.topic_taxonomy = taxonomy.into();
        self.config.search.topic_field = field;
        self
    }

    /// Set the custom field that request metadata values filter on.
    pub fn with_metadata_key(mut self, key: impl Into<String>) -> Self {
        self.config.search.metadata_key = key.into();
        self
    }

    /// Set the sort token used when a request names none.
    pub fn with_default_sort(mut self, token: impl Into<String>) -> Self {
        self.config.search.default_sort = token.into();
        self
    }

    /// Register a named store-native sort.
    pub fn with_field_sort(mut self, token: impl Into<String>, spec: SortSpec) -> Self {
        self.config.search.field_sorts.insert(token.into(), spec);
        self
    }

    /// Set the weighting profile for relevance mode.
    pub fn with_scoring(mut self, scoring: WeightingConfig) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self.config.logging.stdout = false;
        self
    }

    /// Use default logging configuration (console output at Info level)
    pub fn with_default_logging(mut self) -> Self {
        self.config.logging = LoggingConfig::default();
        self
    }

    /// Create a configuration for development.
    ///
    /// Debug-level, pretty-printed logging to the console.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Create a configuration for testing.
    ///
    /// Only warnings and errors are logged.
    pub fn testing() -> Self {
        Self::new().with_log_level(LogLevel::Warn)
    }

    /// Create a production-ready configuration.
    ///
    /// JSON logging at Info level.
    pub fn production() -> Self {
        Self::new()
            .with_default_logging()
            .with_log_format(LogFormat::Json)
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<RankwellConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
