//! Query translation
//!
//! Maps caller parameters onto the store's filter vocabulary and decides
//! whether the relevance core runs. Only the `relevance` sort token routes
//! into scoring; every other mode becomes a store-native sort directive or
//! leaves the store's order untouched.

use std::collections::BTreeMap;

use crate::config::{RankwellConfig, SearchConfig};
use crate::query::clause::{MetaClause, TaxonomyClause};
use crate::query::sort::{RELEVANCE, SortMode};
use crate::query::SearchRequest;
use crate::search::WeightingConfig;
use crate::storage::filters::{DocumentFilter, SortDirection, SortField, SortSpec};
use crate::{RankwellError, Result};

/// Split a comma-joined parameter into its non-empty, trimmed parts
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// A request translated for the store and the ranker
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedQuery {
    /// Filter handed to the store
    pub filter: DocumentFilter,

    /// Resolved sort mode
    pub sort: SortMode,

    /// Trimmed keyword, empty when absent
    pub keyword: String,

    /// Weighting for the relevance pass; `None` outside relevance mode
    pub weighting: Option<WeightingConfig>,
}

impl TranslatedQuery {
    /// Taxonomy clauses read by the taxonomy scorer
    pub fn clauses(&self) -> &[TaxonomyClause] {
        &self.filter.taxonomy
    }
}

/// Translates caller requests using the configured search settings
#[derive(Debug, Clone)]
pub struct QueryTranslator {
    search: SearchConfig,
    scoring: WeightingConfig,
}

impl QueryTranslator {
    /// Create a translator
    pub fn new(search: SearchConfig, scoring: WeightingConfig) -> Self {
        Self { search, scoring }
    }

    /// Create a translator from the crate configuration
    pub fn from_config(config: &RankwellConfig) -> Self {
        Self::new(config.search.clone(), config.scoring.clone())
    }

    /// Resolve a sort token
    ///
    /// Blank or missing tokens fall back to the configured default sort.
    pub fn resolve_sort(&self, token: Option<&str>) -> SortMode {
        let token = token.map(str::trim).filter(|t| !t.is_empty());
        match token {
            Some(token) => resolve_token(token, &self.search.field_sorts),
            None => {
                let default = self.search.default_sort.trim();
                if default.is_empty() {
                    SortMode::Relevance
                } else {
                    resolve_token(default, &self.search.field_sorts)
                }
            }
        }
    }

    /// Translate a request
    ///
    /// Fails only when the request carries invalid weighting overrides.
    pub fn translate(&self, request: &SearchRequest) -> Result<TranslatedQuery> {
        let keyword = request
            .keyword
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        let mut filter = DocumentFilter {
            document_type: Some(self.search.document_type.clone()),
            status: Some(self.search.status.clone()),
            ..Default::default()
        };

        if !keyword.is_empty() {
            filter.search = Some(keyword.clone());
        }

        if !request.topics.is_empty() {
            filter.taxonomy.push(TaxonomyClause::any_of(
                self.search.topic_taxonomy.clone(),
                self.search.topic_field,
                request.topics.iter().cloned(),
            ));
        }
        filter.taxonomy.extend(request.taxonomy.iter().cloned());

        if !request.metadata_values.is_empty() {
            filter.metadata.push(MetaClause::any_of(
                self.search.metadata_key.clone(),
                request.metadata_values.iter().cloned(),
            ));
        }

        let sort = self.resolve_sort(request.orderby.as_deref());
        filter.sort = sort.store_sort();

        let weighting = if sort.requires_scoring() {
            let weighting = request.weighting.clone().unwrap_or_else(|| self.scoring.clone());
            weighting.validate().map_err(RankwellError::InvalidRequest)?;
            Some(weighting)
        } else {
            None
        };

        tracing::debug!(
            sort = %sort,
            keyword = %keyword,
            taxonomy_clauses = filter.taxonomy.len(),
            metadata_clauses = filter.metadata.len(),
            "Translated search request"
        );

        Ok(TranslatedQuery {
            filter,
            sort,
            keyword,
            weighting,
        })
    }
}

fn resolve_token(token: &str, field_sorts: &BTreeMap<String, SortSpec>) -> SortMode {
    let token = token.to_lowercase();
    match token.as_str() {
        RELEVANCE => SortMode::Relevance,
        "title" => SortMode::Title,
        "pubdate" => SortMode::PubDate,
        _ => {
            if let Some(spec) = field_sorts.get(&token) {
                return SortMode::Field(spec.clone());
            }
            if let Some(field) = token.strip_suffix("_asc").filter(|f| !f.is_empty()) {
                return SortMode::Field(SortSpec::new(
                    SortField::Meta(field.to_string()),
                    SortDirection::Ascending,
                ));
            }
            if let Some(field) = token.strip_suffix("_desc").filter(|f| !f.is_empty()) {
                return SortMode::Field(SortSpec::new(
                    SortField::Meta(field.to_string()),
                    SortDirection::Descending,
                ));
            }
            tracing::debug!(token = %token, "Unrecognized sort token, keeping store order");
            SortMode::Native
        }
    }
}
