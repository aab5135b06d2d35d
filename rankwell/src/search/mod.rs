//! Relevance scoring and ranking
//!
//! The core of the crate: signal scorers, the aggregator combining them, and
//! the ranker ordering candidates by the result.
//!
//! # Overview
//!
//! - [`keyword`]: keyword occurrences in title and body
//! - [`taxonomy`]: squared overlap between wanted and assigned terms
//! - [`calculator`]: sums the signals per candidate
//! - [`ranker`]: stable descending sort
//!
//! Weights come from [`scoring::WeightingConfig`], merged over the defaults
//! (title 1.0, body 0.25, taxonomy 15.0) once per query.

pub mod calculator;
pub mod keyword;
pub mod ranker;
pub mod scoring;
pub mod taxonomy;

pub use calculator::{RelevanceCalculator, Scorable, ScoreBreakdown, ScoredCandidate};
pub use keyword::KeywordScorer;
pub use ranker::{rank_by_relevance, rank_scored, score_and_rank};
pub use scoring::{ResolvedWeights, WeightingConfig};
pub use taxonomy::TaxonomyScorer;
