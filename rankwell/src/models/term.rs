//! Taxonomy term model

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A named value within a taxonomy dimension
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Term {
    /// Numeric term identifier
    pub id: u64,

    /// URL-safe identifier
    pub slug: String,

    /// Display name
    pub name: String,
}

impl Term {
    /// Create a new term
    pub fn new(id: u64, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
        }
    }

    /// The value of this term in the given match field
    ///
    /// Identifiers render in decimal so they compare equal to the string
    /// form a caller sends over the wire.
    pub fn field_value(&self, field: TermField) -> Cow<'_, str> {
        match field {
            TermField::Id => Cow::Owned(self.id.to_string()),
            TermField::Slug => Cow::Borrowed(&self.slug),
            TermField::Name => Cow::Borrowed(&self.name),
        }
    }
}

/// Which attribute of a term a taxonomy clause matches against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TermField {
    /// Numeric identifier
    #[default]
    #[serde(alias = "term_id")]
    Id,

    /// URL-safe identifier
    Slug,

    /// Display name
    Name,
}

impl fmt::Display for TermField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => write!(f, "id"),
            Self::Slug => write!(f, "slug"),
            Self::Name => write!(f, "name"),
        }
    }
}

impl std::str::FromStr for TermField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" | "term_id" => Ok(Self::Id),
            "slug" => Ok(Self::Slug),
            "name" => Ok(Self::Name),
            _ => Err(format!("Unknown term field: {}", s)),
        }
    }
}
