//! Filter types for document store queries

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::query::clause::{MetaClause, TaxonomyClause};

/// Filter for document queries
///
/// Every populated predicate must hold for a document to be returned.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DocumentFilter {
    /// Filter by content type
    pub document_type: Option<String>,

    /// Filter by publication status
    pub status: Option<String>,

    /// Free-text predicate over title and body
    pub search: Option<String>,

    /// Taxonomy membership predicates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taxonomy: Vec<TaxonomyClause>,

    /// Custom field predicates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetaClause>,

    /// Store-native sort directive; `None` keeps the store's own order
    pub sort: Option<SortSpec>,
}

/// Sort direction for query results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order
    #[serde(alias = "asc")]
    Ascending,

    /// Descending order
    #[serde(alias = "desc")]
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// Field a store-native sort orders by
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Document title
    Title,

    /// Publication date
    PublishedAt,

    /// A custom field, compared by its string form
    Meta(String),
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::PublishedAt => write!(f, "published_at"),
            Self::Meta(key) => write!(f, "meta:{}", key),
        }
    }
}

/// Sort specification for query results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by
    pub field: SortField,

    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a sort specification
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Helper functions for constructing filters
pub mod helpers {
    use super::*;

    /// Create a filter by content type and status
    pub fn published(document_type: &str) -> DocumentFilter {
        DocumentFilter {
            document_type: Some(document_type.to_string()),
            status: Some("publish".to_string()),
            ..Default::default()
        }
    }

    /// Create a filter matching free text
    pub fn matching(search: &str) -> DocumentFilter {
        DocumentFilter {
            search: Some(search.to_string()),
            ..Default::default()
        }
    }
}
