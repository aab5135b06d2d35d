//! Sort modes requested by callers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::storage::filters::{SortDirection, SortField, SortSpec};

/// Token selecting relevance ranking
pub const RELEVANCE: &str = "relevance";

/// How a result list is ordered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Score every candidate and rank by descending relevance
    Relevance,

    /// Title, ascending
    Title,

    /// Publication date, most recent first
    PubDate,

    /// A named field sort executed by the store
    Field(SortSpec),

    /// Whatever order the store returns
    Native,
}

impl SortMode {
    /// Whether this mode routes through the relevance scorers
    pub fn requires_scoring(&self) -> bool {
        matches!(self, Self::Relevance)
    }

    /// The store-native sort directive for this mode
    ///
    /// Relevance and native modes leave ordering to the store (and, for
    /// relevance, to the ranker afterwards).
    pub fn store_sort(&self) -> Option<SortSpec> {
        match self {
            Self::Relevance | Self::Native => None,
            Self::Title => Some(SortSpec::new(SortField::Title, SortDirection::Ascending)),
            Self::PubDate => Some(SortSpec::new(SortField::PublishedAt, SortDirection::Descending)),
            Self::Field(spec) => Some(spec.clone()),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relevance => write!(f, "relevance"),
            Self::Title => write!(f, "title"),
            Self::PubDate => write!(f, "pubdate"),
            Self::Field(spec) => write!(f, "{} {}", spec.field, spec.direction),
            Self::Native => write!(f, "native"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_relevance_requires_scoring() {
        assert!(SortMode::Relevance.requires_scoring());
        assert!(!SortMode::Title.requires_scoring());
        assert!(!SortMode::PubDate.requires_scoring());
        assert!(!SortMode::Native.requires_scoring());
    }

    #[test]
    fn test_store_sort() {
        assert_eq!(SortMode::Relevance.store_sort(), None);
        assert_eq!(
            SortMode::PubDate.store_sort(),
            Some(SortSpec::new(SortField::PublishedAt, SortDirection::Descending))
        );
        let spec = SortSpec::new(SortField::Meta("agency_type".into()), SortDirection::Ascending);
        assert_eq!(SortMode::Field(spec.clone()).store_sort(), Some(spec));
    }

    #[test]
    fn test_display() {
        let spec = SortSpec::new(SortField::Meta("date_enacted".into()), SortDirection::Descending);
        assert_eq!(SortMode::Field(spec).to_string(), "meta:date_enacted desc");
        assert_eq!(SortMode::Relevance.to_string(), "relevance");
    }
}
