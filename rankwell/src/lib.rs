//! # Rankwell
//!
//! Relevance ranking for filtered document searches. A document store does
//! the filtering; Rankwell scores the returned candidates by keyword
//! occurrences and taxonomy overlap and orders them by descending score.
//!
//! ## Quick Start
//!
//! ```rust
//! use rankwell::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let store = InMemoryStore::with_documents(vec![
//!         Document::builder(1, "Water Rights Act")
//!             .terms("policy_topics", vec![Term::new(5, "water", "Water")])
//!             .build(),
//!         Document::builder(2, "Land Use")
//!             .terms(
//!                 "policy_topics",
//!                 vec![Term::new(5, "water", "Water"), Term::new(9, "land", "Land")],
//!             )
//!             .build(),
//!     ]);
//!
//!     let service = SearchService::new(Arc::new(store), &RankwellConfig::default());
//!     let results = service
//!         .search(&SearchRequest::new().topics([5i64, 9]))
//!         .await?;
//!
//!     assert_eq!(results.hits[0].document.id, 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **search**: the synchronous scoring core (keyword, taxonomy, aggregation, ranking)
//! - **query**: request parameters and their translation into store filters
//! - **storage**: the store trait and an in-memory implementation
//! - **core**: the search service composing fetch and ranking

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod query;
pub mod search;
pub mod storage;

use std::sync::{Arc, Mutex};
use tracing_appender::non_blocking::WorkerGuard;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::init;

    // Re-export config types
    pub use crate::config::{ConfigBuilder, ConfigLoader, LogLevel, RankwellConfig, SearchConfig};

    // Re-export model types
    pub use crate::models::{Document, DocumentBuilder, Term, TermField};

    // Re-export query types
    pub use crate::query::{QueryTranslator, SearchRequest, SortMode, TaxonomyClause, TermValue};

    // Re-export the scoring core
    pub use crate::search::{
        RelevanceCalculator, ScoreBreakdown, ScoredCandidate, WeightingConfig, rank_by_relevance,
    };

    // Re-export the service and storage types
    pub use crate::core::{SearchHit, SearchResults, SearchService};
    pub use crate::storage::{DocumentStore, InMemoryStore, StorageError};

    pub use crate::{RankwellError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Rankwell operations
#[derive(Debug, thiserror::Error)]
pub enum RankwellError {
    /// Error reported by the document store
    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// The request could not be translated
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for RankwellError {
    fn from(err: crate::config::ConfigError) -> Self {
        RankwellError::Configuration(err.to_string())
    }
}

/// Result type for Rankwell operations
pub type Result<T> = std::result::Result<T, RankwellError>;

// Keeps the file writer flushing for the life of the process.
static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Initialize Rankwell with the provided configuration
///
/// Validates the configuration, sets up logging and returns a search service
/// over `store`. Logging setup is skipped when a global subscriber already
/// exists.
///
/// # Examples
///
/// ```rust
/// use rankwell::prelude::*;
/// use std::sync::Arc;
///
/// fn example() -> Result<()> {
///     let config = ConfigBuilder::testing().build()?;
///     let service = init(config, Arc::new(InMemoryStore::new()))?;
///     assert_eq!(service.translator().resolve_sort(None), SortMode::Relevance);
///     Ok(())
/// }
/// ```
pub fn init<S: storage::DocumentStore + ?Sized>(
    config: config::RankwellConfig,
    store: Arc<S>,
) -> Result<core::SearchService<S>> {
    config::validate_config(&config)?;

    let guard = logging::init(&config.logging)?;
    if guard.is_some()
        && let Ok(mut slot) = LOG_GUARD.lock()
    {
        *slot = guard;
    }

    Ok(core::SearchService::new(store, &config))
}
