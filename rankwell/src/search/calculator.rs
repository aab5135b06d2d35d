//! Relevance score aggregation
//!
//! This module combines the keyword and taxonomy signals into one score per
//! candidate. Scores are plain sums with no normalization, so magnitudes are
//! only comparable within a single query's result set.

use serde::{Deserialize, Serialize};

use crate::models::{Document, Term};
use crate::query::clause::TaxonomyClause;

use super::keyword::KeywordScorer;
use super::scoring::{ResolvedWeights, WeightingConfig};
use super::taxonomy::TaxonomyScorer;

/// Read access to the document fields the scorers use
pub trait Scorable {
    /// Title text
    fn title(&self) -> &str;

    /// Body text
    fn body(&self) -> &str;

    /// Assigned terms within a dimension
    fn terms_in(&self, dimension: &str) -> &[Term];
}

impl Scorable for Document {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.content
    }

    fn terms_in(&self, dimension: &str) -> &[Term] {
        Document::terms_in(self, dimension)
    }
}

/// Per-signal contributions to a candidate's score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Keyword occurrence contribution
    pub keyword: f32,

    /// Taxonomy overlap contribution
    pub taxonomy: f32,
}

impl ScoreBreakdown {
    /// Sum of all contributions
    pub fn total(&self) -> f32 {
        self.keyword + self.taxonomy
    }
}

/// A candidate paired with its relevance score for one ranking call
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<D = Document> {
    /// The candidate document
    pub document: D,

    /// Total relevance score
    pub score: f32,

    /// How the score was assembled
    pub breakdown: ScoreBreakdown,
}

/// Calculator combining all relevance signals for one query
///
/// Built once per query; scoring a candidate does no I/O and allocates only
/// the case-folded copies of its title and body.
#[derive(Debug, Clone)]
pub struct RelevanceCalculator {
    weights: ResolvedWeights,
    keyword: KeywordScorer,
    taxonomy: TaxonomyScorer,
}

impl RelevanceCalculator {
    /// Prepare the scorers for a query
    ///
    /// `weighting` overlays the default weights; `None` uses the defaults.
    pub fn new(keyword: &str, clauses: &[TaxonomyClause], weighting: Option<&WeightingConfig>) -> Self {
        let weights = ResolvedWeights::overlay(weighting);
        let taxonomy = TaxonomyScorer::new(clauses, &weights);
        Self {
            keyword: KeywordScorer::new(keyword),
            taxonomy,
            weights,
        }
    }

    /// The resolved weights in effect
    pub fn weights(&self) -> &ResolvedWeights {
        &self.weights
    }

    /// Taxonomy dimensions whose terms the calculator reads
    pub fn scored_dimensions(&self) -> Vec<&str> {
        self.taxonomy.dimensions()
    }

    /// Score one candidate
    pub fn breakdown<D: Scorable>(&self, document: &D) -> ScoreBreakdown {
        ScoreBreakdown {
            keyword: self.keyword.score(document.title(), document.body(), &self.weights),
            taxonomy: self.taxonomy.score(|dimension| document.terms_in(dimension)),
        }
    }

    /// Score every candidate, keeping the input order
    pub fn score_all<D: Scorable>(&self, candidates: Vec<D>) -> Vec<ScoredCandidate<D>> {
        candidates
            .into_iter()
            .map(|document| {
                let breakdown = self.breakdown(&document);
                ScoredCandidate {
                    score: breakdown.total(),
                    breakdown,
                    document,
                }
            })
            .collect()
    }
}
