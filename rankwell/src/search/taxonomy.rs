//! Taxonomy term overlap scoring
//!
//! For every eligible clause the scorer measures which fraction of the wanted
//! terms a document carries, squares it and multiplies by the dimension's
//! weight. Squaring separates documents that match most of the requested
//! terms from those that match only a few.

use std::collections::HashSet;

use crate::models::{Term, TermField};
use crate::query::clause::TaxonomyClause;

use super::scoring::ResolvedWeights;

/// A clause that passed the eligibility check, with its weight resolved
#[derive(Debug, Clone)]
struct EligibleClause {
    taxonomy: String,
    field: TermField,
    wanted: HashSet<String>,
    // Length of the wanted list as supplied, duplicates included
    wanted_count: usize,
    weight: f32,
}

/// Taxonomy scorer prepared once per query
#[derive(Debug, Clone, Default)]
pub struct TaxonomyScorer {
    clauses: Vec<EligibleClause>,
}

impl TaxonomyScorer {
    /// Select the eligible clauses and resolve their weights
    ///
    /// A clause is eligible when its operator is `IN` (any case) and its
    /// terms value is a non-empty list. Everything else is skipped: other
    /// operators match all candidates alike and cannot discriminate.
    pub fn new(clauses: &[TaxonomyClause], weights: &ResolvedWeights) -> Self {
        let clauses = clauses
            .iter()
            .filter_map(|clause| {
                let Some(wanted) = clause.scoring_terms() else {
                    tracing::debug!(
                        taxonomy = %clause.taxonomy,
                        operator = %clause.operator,
                        "Skipping taxonomy clause for relevance scoring"
                    );
                    return None;
                };

                Some(EligibleClause {
                    taxonomy: clause.taxonomy.clone(),
                    field: clause.field,
                    wanted_count: wanted.len(),
                    wanted: wanted.into_iter().collect(),
                    weight: weights.taxonomy_weight(&clause.taxonomy),
                })
            })
            .collect();

        Self { clauses }
    }

    /// Whether any clause is eligible
    pub fn is_active(&self) -> bool {
        !self.clauses.is_empty()
    }

    /// Distinct dimensions the scorer reads, in clause order
    pub fn dimensions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.clauses
            .iter()
            .map(|clause| clause.taxonomy.as_str())
            .filter(|taxonomy| seen.insert(*taxonomy))
            .collect()
    }

    /// Score contribution for one document
    ///
    /// `terms_in` yields the document's terms for a dimension. Duplicate
    /// assignments count once each.
    pub fn score<'a, F>(&self, terms_in: F) -> f32
    where
        F: Fn(&str) -> &'a [Term],
    {
        self.clauses
            .iter()
            .map(|clause| {
                let matched = terms_in(&clause.taxonomy)
                    .iter()
                    .filter(|term| clause.wanted.contains(&*term.field_value(clause.field)))
                    .count();
                let ratio = matched as f32 / clause.wanted_count as f32;
                ratio * ratio * clause.weight
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;

    fn topic(id: u64) -> Term {
        Term::new(id, format!("topic-{}", id), format!("Topic {}", id))
    }

    fn doc_with_topics(ids: &[u64]) -> Document {
        Document::builder(1, "doc")
            .terms("topics", ids.iter().copied().map(topic).collect())
            .build()
    }

    fn score(clauses: &[TaxonomyClause], doc: &Document) -> f32 {
        let scorer = TaxonomyScorer::new(clauses, &ResolvedWeights::default());
        scorer.score(|dimension| doc.terms_in(dimension))
    }

    #[test]
    fn test_half_overlap_is_quarter_weight() {
        let clause = TaxonomyClause::any_of("topics", TermField::Id, [1i64, 2, 3, 4]);
        let doc = doc_with_topics(&[2, 4]);
        assert_eq!(score(&[clause], &doc), 0.25 * 15.0);
    }

    #[test]
    fn test_full_overlap_is_full_weight() {
        let clause = TaxonomyClause::any_of("topics", TermField::Id, [5i64, 9]);
        let doc = doc_with_topics(&[9, 5]);
        assert_eq!(score(&[clause], &doc), 15.0);
    }

    #[test]
    fn test_non_in_operator_never_contributes() {
        let clause = TaxonomyClause::any_of("topics", TermField::Id, [5i64, 9]).with_operator("AND");
        let doc = doc_with_topics(&[5, 9]);
        assert_eq!(score(&[clause], &doc), 0.0);
    }

    #[test]
    fn test_lowercase_in_is_eligible() {
        let clause = TaxonomyClause::any_of("topics", TermField::Id, [5i64]).with_operator("in");
        let doc = doc_with_topics(&[5]);
        assert_eq!(score(&[clause], &doc), 15.0);
    }

    #[test]
    fn test_document_without_terms_scores_zero() {
        let clause = TaxonomyClause::any_of("topics", TermField::Id, [5i64, 9]);
        let doc = Document::new(1, "no terms", "");
        assert_eq!(score(&[clause], &doc), 0.0);
    }

    #[test]
    fn test_duplicate_assignments_count_with_multiplicity() {
        let clause = TaxonomyClause::any_of("topics", TermField::Id, [5i64, 9]);
        let doc = doc_with_topics(&[5, 5]);
        assert_eq!(score(&[clause], &doc), 15.0);
    }

    #[test]
    fn test_match_by_slug_and_name() {
        let doc = doc_with_topics(&[5, 9]);

        let by_slug = TaxonomyClause::any_of("topics", TermField::Slug, ["topic-5", "topic-7"]);
        assert_eq!(score(&[by_slug], &doc), 0.25 * 15.0);

        let by_name = TaxonomyClause::any_of("topics", TermField::Name, ["Topic 9"]);
        assert_eq!(score(&[by_name], &doc), 15.0);
    }

    #[test]
    fn test_string_ids_match_numeric_terms() {
        let clause = TaxonomyClause::any_of("topics", TermField::Id, ["5", "9"]);
        let doc = doc_with_topics(&[5]);
        assert_eq!(score(&[clause], &doc), 0.25 * 15.0);
    }

    #[test]
    fn test_clauses_sum_with_per_dimension_weights() {
        let doc = Document::builder(1, "doc")
            .terms("topics", vec![topic(1)])
            .terms("regions", vec![topic(2)])
            .build();
        let clauses = [
            TaxonomyClause::any_of("topics", TermField::Id, [1i64]),
            TaxonomyClause::any_of("regions", TermField::Id, [2i64, 3]),
        ];
        let weights = ResolvedWeights::overlay(Some(
            &crate::search::WeightingConfig::new().with_taxonomy("regions", 4.0),
        ));
        let scorer = TaxonomyScorer::new(&clauses, &weights);

        assert_eq!(scorer.score(|d| doc.terms_in(d)), 15.0 + 0.25 * 4.0);
        assert_eq!(scorer.dimensions(), vec!["topics", "regions"]);
    }

    #[test]
    fn test_zero_padded_ids_stay_distinct() {
        let doc = doc_with_topics(&[5]);

        let padded = TaxonomyClause::any_of("topics", TermField::Id, ["05"]);
        assert_eq!(score(&[padded], &doc), 0.0);

        let plain = TaxonomyClause::any_of("topics", TermField::Id, ["5"]);
        assert_eq!(score(&[plain], &doc), 15.0);
    }

    #[test]
    fn test_malformed_terms_never_contribute() {
        let doc = doc_with_topics(&[5]);
        let clauses: Vec<TaxonomyClause> = [
            serde_json::json!(null),
            serde_json::json!({"a": 5}),
            serde_json::json!([5.0]),
        ]
        .into_iter()
        .map(|terms| {
            serde_json::from_value(serde_json::json!({
                "taxonomy": "topics",
                "operator": "IN",
                "terms": terms
            }))
            .unwrap()
        })
        .collect();

        let scorer = TaxonomyScorer::new(&clauses, &ResolvedWeights::default());
        assert!(!scorer.is_active());
        assert_eq!(score(&clauses, &doc), 0.0);
    }

    #[test]
    fn test_ineligible_clauses_leave_scorer_inactive() {
        let clauses = [
            TaxonomyClause::any_of("topics", TermField::Id, Vec::<i64>::new()),
            TaxonomyClause::any_of("topics", TermField::Id, [1i64]).with_operator("NOT IN"),
        ];
        let scorer = TaxonomyScorer::new(&clauses, &ResolvedWeights::default());
        assert!(!scorer.is_active());
        assert!(scorer.dimensions().is_empty());
    }
}
