//! Search requests and their translation into store filters
//!
//! [`SearchRequest`] mirrors the parameters of the search page: a keyword,
//! comma-joined topic identifiers, metadata values and a sort token. The
//! [`QueryTranslator`] turns it into a [`crate::storage::filters::DocumentFilter`]
//! plus a [`SortMode`].

pub mod clause;
pub mod sort;
pub mod translator;

use serde::{Deserialize, Serialize};

use crate::search::WeightingConfig;

pub use clause::{ClauseTerms, MetaClause, MetaCompare, TaxonomyClause, TermValue};
pub use sort::SortMode;
pub use translator::{QueryTranslator, TranslatedQuery, split_list};

/// A caller's search request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// Free-text keyword
    pub keyword: Option<String>,

    /// Term identifiers within the configured topic taxonomy
    pub topics: Vec<TermValue>,

    /// Accepted values of the configured metadata key
    pub metadata_values: Vec<String>,

    /// Additional taxonomy clauses
    pub taxonomy: Vec<TaxonomyClause>,

    /// Sort token (`relevance`, `title`, `pubdate`, or a named field sort)
    pub orderby: Option<String>,

    /// Weighting overrides for relevance mode
    pub weighting: Option<WeightingConfig>,
}

impl SearchRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keyword
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Set the topic identifiers
    pub fn topics<T: Into<TermValue>>(mut self, topics: impl IntoIterator<Item = T>) -> Self {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Set the accepted metadata values
    pub fn metadata_values<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.metadata_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Add a taxonomy clause
    pub fn taxonomy_clause(mut self, clause: TaxonomyClause) -> Self {
        self.taxonomy.push(clause);
        self
    }

    /// Set the sort token
    pub fn orderby(mut self, orderby: impl Into<String>) -> Self {
        self.orderby = Some(orderby.into());
        self
    }

    /// Set weighting overrides
    pub fn weighting(mut self, weighting: WeightingConfig) -> Self {
        self.weighting = Some(weighting);
        self
    }
}
