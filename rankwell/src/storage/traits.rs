//! Trait definitions for the document store collaborator

use async_trait::async_trait;
use std::fmt::Debug;

use crate::models::{Document, Term};
use crate::storage::errors::StorageError;
use crate::storage::filters::DocumentFilter;

/// A queryable content store
///
/// The store owns filtering and native field sorting. Relevance ranking is
/// layered on top by [`crate::core::SearchService`] and never pushed down.
#[async_trait]
pub trait DocumentStore: Send + Sync + Debug {
    /// Return every document matching `filter`
    ///
    /// Results are ordered by `filter.sort` when present, otherwise in the
    /// store's native order. No pagination is applied.
    async fn find(&self, filter: &DocumentFilter) -> std::result::Result<Vec<Document>, StorageError>;

    /// Terms assigned to `document` within `dimension`
    async fn terms_of(
        &self,
        document: &Document,
        dimension: &str,
    ) -> std::result::Result<Vec<Term>, StorageError>;

    /// Number of documents held by the store
    async fn count(&self) -> std::result::Result<usize, StorageError>;
}
