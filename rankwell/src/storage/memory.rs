//! In-memory document store
//!
//! A reference [`DocumentStore`] used by tests and the CLI. Filter semantics
//! follow a typical CMS query engine: every populated predicate must hold,
//! free text requires each whitespace-separated word to appear in the title
//! or body, and taxonomy clauses support the usual membership operators.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::path::Path;
use tokio::sync::RwLock;

use crate::models::{Document, Term};
use crate::query::clause::{MetaClause, MetaCompare, TaxonomyClause};
use crate::storage::errors::{StorageError, StorageResult};
use crate::storage::filters::{DocumentFilter, SortDirection, SortField, SortSpec};
use crate::storage::traits::DocumentStore;

/// Document store holding its contents in a vector
///
/// Without a sort directive, documents come back in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `documents` in the given order
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    /// Parse a JSON array of documents
    pub fn from_json_str(json: &str) -> StorageResult<Self> {
        let documents: Vec<Document> = serde_json::from_str(json)?;
        Ok(Self::with_documents(documents))
    }

    /// Load a JSON array of documents from a file
    pub async fn from_json_file(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            StorageError::Io(format!("failed to read {}: {}", path.display(), e))
        })?;
        let store = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            documents = store.documents.read().await.len(),
            "Loaded document corpus"
        );
        Ok(store)
    }

    /// Append a document, replacing any existing document with the same id
    pub async fn insert(&self, document: Document) {
        let mut documents = self.documents.write().await;
        if let Some(existing) = documents.iter_mut().find(|d| d.id == document.id) {
            *existing = document;
        } else {
            documents.push(document);
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn find(&self, filter: &DocumentFilter) -> StorageResult<Vec<Document>> {
        let documents = self.documents.read().await;

        let mut matched = Vec::new();
        for document in documents.iter() {
            if matches_filter(document, filter)? {
                matched.push(document.clone());
            }
        }

        if let Some(sort) = &filter.sort {
            sort_documents(&mut matched, sort);
        }

        Ok(matched)
    }

    async fn terms_of(&self, document: &Document, dimension: &str) -> StorageResult<Vec<Term>> {
        let documents = self.documents.read().await;
        documents
            .iter()
            .find(|d| d.id == document.id)
            .map(|d| d.terms_in(dimension).to_vec())
            .ok_or_else(|| StorageError::NotFound(format!("document {}", document.id)))
    }

    async fn count(&self) -> StorageResult<usize> {
        Ok(self.documents.read().await.len())
    }
}

fn matches_filter(document: &Document, filter: &DocumentFilter) -> StorageResult<bool> {
    if let Some(document_type) = &filter.document_type
        && &document.document_type != document_type
    {
        return Ok(false);
    }

    if let Some(status) = &filter.status
        && &document.status != status
    {
        return Ok(false);
    }

    if let Some(search) = &filter.search
        && !matches_search(document, search)
    {
        return Ok(false);
    }

    for clause in &filter.taxonomy {
        if !matches_taxonomy(document, clause)? {
            return Ok(false);
        }
    }

    Ok(filter.metadata.iter().all(|clause| matches_meta(document, clause)))
}

/// Every word of `search` must occur in the title or body, ignoring case
fn matches_search(document: &Document, search: &str) -> bool {
    let title = document.title.to_lowercase();
    let content = document.content.to_lowercase();

    search
        .to_lowercase()
        .split_whitespace()
        .all(|word| title.contains(word) || content.contains(word))
}

fn matches_taxonomy(document: &Document, clause: &TaxonomyClause) -> StorageResult<bool> {
    let wanted = clause.terms.values();
    let assigned: Vec<String> = document
        .terms_in(&clause.taxonomy)
        .iter()
        .map(|term| term.field_value(clause.field).into_owned())
        .collect();

    let operator = clause.operator.trim().to_uppercase();
    let needs_terms = matches!(operator.as_str(), "IN" | "NOT IN" | "AND");
    if needs_terms && wanted.is_empty() {
        // Clauses without terms place no constraint
        return Ok(true);
    }

    let matched = match operator.as_str() {
        "IN" => assigned.iter().any(|value| wanted.contains(value)),
        "NOT IN" => !assigned.iter().any(|value| wanted.contains(value)),
        "AND" => wanted.iter().all(|value| assigned.contains(value)),
        "EXISTS" => !assigned.is_empty(),
        "NOT EXISTS" => assigned.is_empty(),
        other => {
            return Err(StorageError::Query(format!(
                "unsupported taxonomy operator '{}'",
                other
            )));
        }
    };

    Ok(matched)
}

fn matches_meta(document: &Document, clause: &MetaClause) -> bool {
    let value = document.meta_string(&clause.key);
    match clause.compare {
        MetaCompare::Equals => match (value, clause.values.first()) {
            (Some(value), Some(wanted)) => &value == wanted,
            _ => false,
        },
        MetaCompare::In => value.is_some_and(|value| clause.values.contains(&value)),
        MetaCompare::NotIn => !value.is_some_and(|value| clause.values.contains(&value)),
    }
}

/// Stable sort by the requested field
///
/// Documents lacking a custom sort field go last in either direction.
fn sort_documents(documents: &mut [Document], sort: &SortSpec) {
    let directed = |ordering: Ordering| match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    };

    match &sort.field {
        SortField::Title => {
            documents.sort_by(|a, b| directed(a.title.to_lowercase().cmp(&b.title.to_lowercase())));
        }
        SortField::PublishedAt => {
            documents.sort_by(|a, b| directed(a.published_at.cmp(&b.published_at)));
        }
        SortField::Meta(key) => {
            documents.sort_by(|a, b| match (a.meta_string(key), b.meta_string(key)) {
                (Some(a), Some(b)) => directed(a.cmp(&b)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
    }
}
