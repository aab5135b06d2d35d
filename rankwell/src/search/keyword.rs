//! Keyword occurrence scoring
//!
//! Each whitespace-separated keyword term is counted as a literal substring
//! in the title and the body, after folding everything to uppercase. Matches
//! are non-overlapping and scanned left to right, so `AN` occurs twice in
//! `BANANA`. There is no notion of word boundaries.

use super::scoring::ResolvedWeights;

/// Non-overlapping occurrences of `needle` in `haystack`
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Keyword scorer prepared once per query
#[derive(Debug, Clone, Default)]
pub struct KeywordScorer {
    terms: Vec<String>,
}

impl KeywordScorer {
    /// Fold and split the keyword string
    ///
    /// An empty or all-whitespace keyword produces an inactive scorer.
    pub fn new(keyword: &str) -> Self {
        let terms = keyword
            .to_uppercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { terms }
    }

    /// Folded keyword terms in query order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether this scorer can contribute anything
    pub fn is_active(&self) -> bool {
        !self.terms.is_empty()
    }

    /// Score contribution for one document
    ///
    /// Sum over terms of `title_hits * title_weight + body_hits * body_weight`.
    pub fn score(&self, title: &str, body: &str, weights: &ResolvedWeights) -> f32 {
        if !self.is_active() {
            return 0.0;
        }

        let title = title.to_uppercase();
        let body = body.to_uppercase();

        self.terms
            .iter()
            .map(|term| {
                let title_hits = count_occurrences(&title, term) as f32;
                let body_hits = count_occurrences(&body, term) as f32;
                title_hits * weights.title_keyword + body_hits * weights.content_keyword
            })
            .sum()
    }
}
