//! Configuration model definitions.
//!
//! This module contains the configuration structures for all Rankwell components.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::models::TermField;
use crate::search::WeightingConfig;
use crate::storage::filters::{SortDirection, SortField, SortSpec};

/// Main configuration structure for Rankwell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RankwellConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Search translation settings
    pub search: SearchConfig,

    /// Weighting applied in relevance mode when a request brings none
    pub scoring: WeightingConfig,
}

impl Default for RankwellConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            search: SearchConfig::default(),
            scoring: WeightingConfig::policy_search(),
        }
    }
}

/// Settings used when translating requests into store filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Content type every search is restricted to
    pub document_type: String,

    /// Publication status every search is restricted to
    pub status: String,

    /// Taxonomy the request's `topics` refer to
    pub topic_taxonomy: String,

    /// Term attribute the request's `topics` are expressed in
    pub topic_field: TermField,

    /// Custom field the request's `metadata_values` filter on
    pub metadata_key: String,

    /// Sort token used when a request names none
    pub default_sort: String,

    /// Named store-native sorts, keyed by sort token
    pub field_sorts: BTreeMap<String, SortSpec>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let mut field_sorts = BTreeMap::new();
        field_sorts.insert(
            "enacted".to_string(),
            SortSpec::new(SortField::Meta("date_enacted".to_string()), SortDirection::Descending),
        );
        field_sorts.insert(
            "policytype".to_string(),
            SortSpec::new(SortField::Meta("policy_type".to_string()), SortDirection::Ascending),
        );
        field_sorts.insert(
            "agencytype".to_string(),
            SortSpec::new(SortField::Meta("agency_type".to_string()), SortDirection::Ascending),
        );

        Self {
            document_type: "policy".to_string(),
            status: "publish".to_string(),
            topic_taxonomy: "policy_topics".to_string(),
            topic_field: TermField::Id,
            metadata_key: "policy_type".to_string(),
            default_sort: "relevance".to_string(),
            field_sorts,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(LogFormat::Default),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}
