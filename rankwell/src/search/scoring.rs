//! Relevance weighting configuration
//!
//! Weights are supplied as a partial [`WeightingConfig`] overlay and merged
//! once over the full set of defaults into [`ResolvedWeights`] before any
//! document is scored. A missing key means "use the default"; an explicit
//! zero switches that signal off.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default weight per keyword occurrence in the title
pub const DEFAULT_TITLE_KEYWORD_WEIGHT: f32 = 1.0;

/// Default weight per keyword occurrence in the body
pub const DEFAULT_CONTENT_KEYWORD_WEIGHT: f32 = 0.25;

/// Default weight of a fully matched taxonomy clause
pub const DEFAULT_TAXONOMY_WEIGHT: f32 = 15.0;

/// Caller-supplied weighting overrides
///
/// # Example
///
/// ```
/// use rankwell::search::scoring::{ResolvedWeights, WeightingConfig};
///
/// let weighting = WeightingConfig::new()
///     .with_title_keyword(2.0)
///     .with_taxonomy("policy_topics", 0.0);
///
/// let weights = ResolvedWeights::overlay(Some(&weighting));
/// assert_eq!(weights.title_keyword, 2.0);
/// assert_eq!(weights.content_keyword, 0.25);
/// assert_eq!(weights.taxonomy_weight("policy_topics"), 0.0);
/// assert_eq!(weights.taxonomy_weight("regions"), 15.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WeightingConfig {
    /// Weight per keyword occurrence in the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_keyword: Option<f32>,

    /// Weight per keyword occurrence in the body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_keyword: Option<f32>,

    /// Weight of a fully matched clause, keyed by taxonomy dimension
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tax_query: BTreeMap<String, f32>,
}

impl WeightingConfig {
    /// Create an empty overlay (every weight at its default)
    pub fn new() -> Self {
        Self::default()
    }

    /// The weighting used by the policy search page
    ///
    /// Title hits 1.0, body hits 0.25, `policy_topics` overlap 15.0.
    pub fn policy_search() -> Self {
        Self::new()
            .with_title_keyword(DEFAULT_TITLE_KEYWORD_WEIGHT)
            .with_content_keyword(DEFAULT_CONTENT_KEYWORD_WEIGHT)
            .with_taxonomy("policy_topics", DEFAULT_TAXONOMY_WEIGHT)
    }

    /// Set the title keyword weight
    pub fn with_title_keyword(mut self, weight: f32) -> Self {
        self.title_keyword = Some(weight);
        self
    }

    /// Set the body keyword weight
    pub fn with_content_keyword(mut self, weight: f32) -> Self {
        self.content_keyword = Some(weight);
        self
    }

    /// Set the weight for one taxonomy dimension
    pub fn with_taxonomy(mut self, dimension: impl Into<String>, weight: f32) -> Self {
        self.tax_query.insert(dimension.into(), weight);
        self
    }

    /// Validate the overlay
    ///
    /// Every weight present must be finite and >= 0.0.
    pub fn validate(&self) -> Result<(), String> {
        fn check(name: &str, weight: f32) -> Result<(), String> {
            if !weight.is_finite() {
                return Err(format!("{} must be a finite number", name));
            }
            if weight < 0.0 {
                return Err(format!("{} must be >= 0.0", name));
            }
            Ok(())
        }

        if let Some(weight) = self.title_keyword {
            check("title_keyword", weight)?;
        }
        if let Some(weight) = self.content_keyword {
            check("content_keyword", weight)?;
        }
        for (dimension, weight) in &self.tax_query {
            check(&format!("tax_query.{}", dimension), *weight)?;
        }

        Ok(())
    }

    /// Whether no weight is overridden
    pub fn is_empty(&self) -> bool {
        self.title_keyword.is_none() && self.content_keyword.is_none() && self.tax_query.is_empty()
    }
}

/// Fully resolved weights used during one scoring pass
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWeights {
    /// Weight per keyword occurrence in the title
    pub title_keyword: f32,

    /// Weight per keyword occurrence in the body
    pub content_keyword: f32,

    /// Weight for dimensions without an explicit entry
    pub default_taxonomy: f32,

    /// Explicit per-dimension weights
    pub taxonomy: BTreeMap<String, f32>,
}

impl Default for ResolvedWeights {
    fn default() -> Self {
        Self {
            title_keyword: DEFAULT_TITLE_KEYWORD_WEIGHT,
            content_keyword: DEFAULT_CONTENT_KEYWORD_WEIGHT,
            default_taxonomy: DEFAULT_TAXONOMY_WEIGHT,
            taxonomy: BTreeMap::new(),
        }
    }
}

impl ResolvedWeights {
    /// Merge an optional overlay over the defaults
    pub fn overlay(weighting: Option<&WeightingConfig>) -> Self {
        let mut weights = Self::default();
        let Some(weighting) = weighting else {
            return weights;
        };

        if let Some(weight) = weighting.title_keyword {
            weights.title_keyword = weight;
        }
        if let Some(weight) = weighting.content_keyword {
            weights.content_keyword = weight;
        }
        weights.taxonomy.extend(
            weighting
                .tax_query
                .iter()
                .map(|(dimension, weight)| (dimension.clone(), *weight)),
        );

        weights
    }

    /// Weight for a taxonomy dimension
    pub fn taxonomy_weight(&self, dimension: &str) -> f32 {
        self.taxonomy
            .get(dimension)
            .copied()
            .unwrap_or(self.default_taxonomy)
    }
}
