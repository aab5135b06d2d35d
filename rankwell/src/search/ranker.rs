//! Relevance ranking
//!
//! Ordering is strictly by score, highest first. The sort is stable, so
//! candidates with equal scores keep the order the store returned them in
//! and repeated identical queries produce identical result lists.

use crate::query::clause::TaxonomyClause;

use super::calculator::{RelevanceCalculator, Scorable, ScoredCandidate};
use super::scoring::WeightingConfig;

/// Sort scored candidates by descending score, stable on ties
pub fn rank_scored<D>(mut candidates: Vec<ScoredCandidate<D>>) -> Vec<ScoredCandidate<D>> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

/// Score and rank candidates, keeping the scores
pub fn score_and_rank<D: Scorable>(
    candidates: Vec<D>,
    keyword: &str,
    clauses: &[TaxonomyClause],
    weighting: Option<&WeightingConfig>,
) -> Vec<ScoredCandidate<D>> {
    let calculator = RelevanceCalculator::new(keyword, clauses, weighting);
    let ranked = rank_scored(calculator.score_all(candidates));

    tracing::debug!(
        candidates = ranked.len(),
        top_score = ranked.first().map(|c| c.score),
        "Ranked candidates by relevance"
    );

    ranked
}

/// Rank candidates by relevance
///
/// Pure function of its inputs: reads document fields only and returns the
/// candidates reordered by descending score.
///
/// # Example
///
/// ```
/// use rankwell::models::{Document, Term, TermField};
/// use rankwell::query::TaxonomyClause;
/// use rankwell::search::rank_by_relevance;
///
/// let a = Document::builder(1, "Water Rights")
///     .terms("topics", vec![Term::new(5, "water", "Water")])
///     .build();
/// let b = Document::builder(2, "Land Use")
///     .terms("topics", vec![Term::new(5, "water", "Water"), Term::new(9, "land", "Land")])
///     .build();
///
/// let clauses = [TaxonomyClause::any_of("topics", TermField::Id, [5i64, 9])];
/// let ranked = rank_by_relevance(vec![a, b], "water", &clauses, None);
///
/// let ids: Vec<u64> = ranked.iter().map(|d| d.id).collect();
/// assert_eq!(ids, vec![2, 1]);
/// ```
pub fn rank_by_relevance<D: Scorable>(
    candidates: Vec<D>,
    keyword: &str,
    clauses: &[TaxonomyClause],
    weighting: Option<&WeightingConfig>,
) -> Vec<D> {
    score_and_rank(candidates, keyword, clauses, weighting)
        .into_iter()
        .map(|candidate| candidate.document)
        .collect()
}
