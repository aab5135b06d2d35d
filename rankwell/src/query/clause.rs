//! Taxonomy and metadata filter clauses
//!
//! Clauses are shared vocabulary: the document store executes them as filter
//! predicates, and the taxonomy scorer reads the eligible ones to compute
//! term overlap.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::TermField;

/// Operator string for inclusion-list matching
pub const OPERATOR_IN: &str = "IN";

fn default_operator() -> String {
    OPERATOR_IN.to_string()
}

/// A single term identifier as supplied by a caller
///
/// Callers send identifiers either as numbers (`5`) or strings (`"5"`,
/// `"water-rights"`); both forms compare by their string rendering.
/// Numbers render in canonical decimal form, so `5` and `"5"` are the same
/// identifier while `"05"` and `"+5"` are distinct text that never matches
/// id 5.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TermValue {
    /// Numeric identifier
    Number(i64),
    /// Textual identifier, slug or name
    Text(String),
}

impl fmt::Display for TermValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for TermValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TermValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TermValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The `terms` value of a taxonomy clause
///
/// Only the list form is usable for overlap scoring. A scalar is still a
/// valid store predicate but is skipped by the scorer. Any other JSON shape
/// (`null`, an object, a list holding floats) is kept as-is so the request
/// still parses; it places no constraint on the store and never scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ClauseTerms {
    /// Ordered list of wanted identifiers
    List(Vec<TermValue>),
    /// A single bare identifier
    Scalar(TermValue),
    /// Anything that is not an identifier or a list of identifiers
    Other(serde_json::Value),
}

impl ClauseTerms {
    /// The wanted identifiers, if this is the list form
    pub fn as_list(&self) -> Option<&[TermValue]> {
        match self {
            Self::List(values) => Some(values),
            Self::Scalar(_) | Self::Other(_) => None,
        }
    }

    /// All identifiers in list or scalar form, rendered as strings
    pub fn values(&self) -> Vec<String> {
        match self {
            Self::List(values) => values.iter().map(ToString::to_string).collect(),
            Self::Scalar(value) => vec![value.to_string()],
            Self::Other(_) => Vec::new(),
        }
    }
}

impl Default for ClauseTerms {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// A categorical filter over one taxonomy dimension
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxonomyClause {
    /// Dimension name (e.g. `policy_topics`)
    pub taxonomy: String,

    /// Term attribute the identifiers refer to
    #[serde(default)]
    pub field: TermField,

    /// Match operator (`IN`, `NOT IN`, `AND`, `EXISTS`, `NOT EXISTS`)
    #[serde(default = "default_operator")]
    pub operator: String,

    /// Wanted identifiers
    #[serde(default)]
    pub terms: ClauseTerms,
}

impl TaxonomyClause {
    /// Create an `IN` clause over a list of identifiers
    pub fn any_of<T: Into<TermValue>>(
        taxonomy: impl Into<String>,
        field: TermField,
        terms: impl IntoIterator<Item = T>,
    ) -> Self {
        Self {
            taxonomy: taxonomy.into(),
            field,
            operator: default_operator(),
            terms: ClauseTerms::List(terms.into_iter().map(Into::into).collect()),
        }
    }

    /// Replace the operator
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }

    /// Whether the operator is an inclusion-list match, compared case-insensitively
    pub fn is_inclusion(&self) -> bool {
        self.operator.trim().eq_ignore_ascii_case(OPERATOR_IN)
    }

    /// Wanted identifiers for overlap scoring
    ///
    /// `None` unless the operator is `IN` and the terms value is a non-empty
    /// list. A `Some` result is therefore never empty.
    pub fn scoring_terms(&self) -> Option<Vec<String>> {
        if !self.is_inclusion() {
            return None;
        }
        let list = self.terms.as_list()?;
        if list.is_empty() {
            return None;
        }
        Some(list.iter().map(ToString::to_string).collect())
    }
}

/// Comparison applied by a metadata clause
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MetaCompare {
    /// Field equals the single value
    #[serde(rename = "=")]
    Equals,
    /// Field equals any of the values
    #[default]
    #[serde(rename = "IN")]
    In,
    /// Field equals none of the values
    #[serde(rename = "NOT IN")]
    NotIn,
}

/// A metadata (custom field) filter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetaClause {
    /// Custom field key
    pub key: String,

    /// Comparison
    #[serde(default)]
    pub compare: MetaCompare,

    /// Values compared against the field's string form
    pub values: Vec<String>,
}

impl MetaClause {
    /// Create an `IN` clause
    pub fn any_of<S: Into<String>>(key: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        Self {
            key: key.into(),
            compare: MetaCompare::In,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an equality clause
    pub fn equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            compare: MetaCompare::Equals,
            values: vec![value.into()],
        }
    }
}
