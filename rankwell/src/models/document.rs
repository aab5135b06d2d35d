//! Document model representing a content item held by the document store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::term::Term;

fn default_document_type() -> String {
    "policy".to_string()
}

fn default_status() -> String {
    "publish".to_string()
}

/// A content item as returned by the document store
///
/// Documents carry everything the relevance scorers read: the title and body
/// text, plus the terms assigned to the document in each taxonomy dimension.
/// They never carry a relevance score; scores live beside the document in a
/// [`crate::search::ScoredCandidate`] for the duration of one ranking call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier within the store
    pub id: u64,

    /// Title text
    pub title: String,

    /// Body text
    #[serde(default)]
    pub content: String,

    /// Content type (e.g. `policy`)
    #[serde(default = "default_document_type")]
    pub document_type: String,

    /// Publication status (e.g. `publish`, `draft`)
    #[serde(default = "default_status")]
    pub status: String,

    /// Publication date
    #[serde(default = "default_published_at")]
    pub published_at: DateTime<Utc>,

    /// Custom field values
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,

    /// Assigned terms keyed by taxonomy dimension name
    #[serde(default)]
    pub terms: BTreeMap<String, Vec<Term>>,
}

fn default_published_at() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl Document {
    /// Create a new published document with the default type
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            document_type: default_document_type(),
            status: default_status(),
            published_at: default_published_at(),
            metadata: HashMap::new(),
            terms: BTreeMap::new(),
        }
    }

    /// Create a builder for more complex document creation
    pub fn builder(id: u64, title: impl Into<String>) -> DocumentBuilder {
        DocumentBuilder::new(id, title)
    }

    /// Terms assigned to this document within `dimension`
    ///
    /// Returns an empty slice when the document has no terms there.
    pub fn terms_in(&self, dimension: &str) -> &[Term] {
        self.terms
            .get(dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replace the terms assigned within `dimension`
    pub fn set_terms(&mut self, dimension: impl Into<String>, terms: Vec<Term>) {
        self.terms.insert(dimension.into(), terms);
    }

    /// Look up a custom field value
    pub fn meta(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }

    /// Custom field value rendered as a string for comparison and sorting
    ///
    /// Strings are returned as-is, numbers and booleans in their JSON form.
    /// Arrays, objects and null yield `None`.
    pub fn meta_string(&self, key: &str) -> Option<String> {
        match self.metadata.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Builder for creating Document instances
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new document builder
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            document: Document::new(id, title, String::new()),
        }
    }

    /// Set the body text
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.document.content = content.into();
        self
    }

    /// Set the content type
    pub fn document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document.document_type = document_type.into();
        self
    }

    /// Set the publication status
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.document.status = status.into();
        self
    }

    /// Set the publication date
    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.document.published_at = published_at;
        self
    }

    /// Set a single custom field value
    pub fn meta(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.document.metadata.insert(key.into(), value);
        self
    }

    /// Assign terms within a dimension
    pub fn terms(mut self, dimension: impl Into<String>, terms: Vec<Term>) -> Self {
        self.document.set_terms(dimension, terms);
        self
    }

    /// Build the final Document instance
    pub fn build(self) -> Document {
        self.document
    }
}
