//! Search service
//!
//! Composes the store fetch with the optional relevance pass. The store
//! filters and sorts natively; only the `relevance` sort mode scores and
//! reorders the returned candidates.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::RankwellConfig;
use crate::models::Document;
use crate::query::{QueryTranslator, SearchRequest, TranslatedQuery};
use crate::search::{RelevanceCalculator, ScoreBreakdown, rank_scored};
use crate::storage::DocumentStore;
use crate::Result;

/// One document in a result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matched document
    pub document: Document,

    /// Relevance score, present only in relevance mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,

    /// Per-signal contributions, present only in relevance mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl SearchHit {
    fn unscored(document: Document) -> Self {
        Self {
            document,
            score: None,
            breakdown: None,
        }
    }
}

/// Ordered result list for one search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Sort mode the results are ordered by, as displayed
    pub sort: String,

    /// Hits in final order
    pub hits: Vec<SearchHit>,
}

impl SearchResults {
    /// Number of hits
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether the search matched nothing
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// The documents in final order
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.hits.iter().map(|hit| &hit.document)
    }
}

/// Runs searches against a document store
#[derive(Debug)]
pub struct SearchService<S: DocumentStore + ?Sized> {
    store: Arc<S>,
    translator: QueryTranslator,
}

impl<S: DocumentStore + ?Sized> SearchService<S> {
    /// Create a service over `store` using the search and scoring settings
    /// of `config`
    pub fn new(store: Arc<S>, config: &RankwellConfig) -> Self {
        Self::with_translator(store, QueryTranslator::from_config(config))
    }

    /// Create a service with an explicit translator
    pub fn with_translator(store: Arc<S>, translator: QueryTranslator) -> Self {
        Self { store, translator }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// The request translator
    pub fn translator(&self) -> &QueryTranslator {
        &self.translator
    }

    /// Execute a search
    ///
    /// Store failures are returned as [`crate::RankwellError::Storage`];
    /// nothing in the ranking pass itself can fail.
    #[tracing::instrument(skip(self, request))]
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResults> {
        let query = self.translator.translate(request)?;
        let documents = self.store.find(&query.filter).await?;
        let candidates = documents.len();

        let hits = if query.sort.requires_scoring() {
            self.rank(&query, documents).await?
        } else {
            documents.into_iter().map(SearchHit::unscored).collect()
        };

        tracing::info!(
            sort = %query.sort,
            candidates,
            hits = hits.len(),
            "Search completed"
        );

        Ok(SearchResults {
            sort: query.sort.to_string(),
            hits,
        })
    }

    /// Score and order candidates for a relevance query
    async fn rank(
        &self,
        query: &TranslatedQuery,
        mut documents: Vec<Document>,
    ) -> Result<Vec<SearchHit>> {
        let calculator =
            RelevanceCalculator::new(&query.keyword, query.clauses(), query.weighting.as_ref());

        for dimension in calculator.scored_dimensions() {
            for document in documents.iter_mut() {
                let terms = self.store.terms_of(document, dimension).await?;
                document.set_terms(dimension, terms);
            }
        }

        let ranked = rank_scored(calculator.score_all(documents));

        tracing::debug!(
            top_score = ranked.first().map(|c| c.score),
            "Ranked candidates by relevance"
        );

        Ok(ranked
            .into_iter()
            .map(|candidate| SearchHit {
                document: candidate.document,
                score: Some(candidate.score),
                breakdown: Some(candidate.breakdown),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RankwellError;
    use crate::models::Term;
    use crate::storage::filters::{DocumentFilter, SortDirection, SortField, SortSpec};
    use crate::storage::{InMemoryStore, StorageError, StorageResult};
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl DocumentStore for Store {
            async fn find(&self, filter: &DocumentFilter) -> StorageResult<Vec<Document>>;
            async fn terms_of(&self, document: &Document, dimension: &str) -> StorageResult<Vec<Term>>;
            async fn count(&self) -> StorageResult<usize>;
        }
    }

    impl std::fmt::Debug for MockStore {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("MockStore").finish()
        }
    }

    fn topic(id: u64) -> Term {
        Term::new(id, format!("topic-{}", id), format!("Topic {}", id))
    }

    fn corpus() -> Vec<Document> {
        vec![
            Document::builder(1, "Water Rights Act")
                .content("Water allocation for farms")
                .terms("policy_topics", vec![topic(5)])
                .build(),
            Document::builder(2, "Land Use")
                .content("Zoning and water")
                .terms("policy_topics", vec![topic(5), topic(9)])
                .build(),
            Document::builder(3, "Budget Report")
                .content("Annual numbers")
                .build(),
        ]
    }

    fn service(store: InMemoryStore) -> SearchService<InMemoryStore> {
        SearchService::new(Arc::new(store), &RankwellConfig::default())
    }

    #[tokio::test]
    async fn test_relevance_search_orders_by_score() {
        let service = service(InMemoryStore::with_documents(corpus()));
        let request = SearchRequest::new().topics([5i64, 9]);

        let results = service.search(&request).await.unwrap();

        let ids: Vec<u64> = results.documents().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(results.sort, "relevance");
        assert_eq!(results.hits[0].score, Some(15.0));
        assert_eq!(results.hits[1].score, Some(3.75));
    }

    #[tokio::test]
    async fn test_native_sort_has_no_scores() {
        let service = service(InMemoryStore::with_documents(corpus()));
        let request = SearchRequest::new().orderby("title");

        let results = service.search(&request).await.unwrap();

        let ids: Vec<u64> = results.documents().map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(results.hits.iter().all(|hit| hit.score.is_none()));
        assert!(results.hits.iter().all(|hit| hit.breakdown.is_none()));
    }

    #[tokio::test]
    async fn test_terms_loaded_only_for_relevance() {
        let mut store = MockStore::new();
        store
            .expect_find()
            .times(2)
            .returning(|_| Ok(vec![Document::new(7, "Water", "")]));
        store
            .expect_terms_of()
            .withf(|_, dimension| dimension == "policy_topics")
            .times(1)
            .returning(|_, _| Ok(vec![topic(5)]));

        let service = SearchService::new(Arc::new(store), &RankwellConfig::default());

        let relevance = SearchRequest::new().keyword("water").topics([5i64]);
        let results = service.search(&relevance).await.unwrap();
        assert_eq!(results.hits[0].score, Some(16.0));

        let by_title = SearchRequest::new().topics([5i64]).orderby("title");
        let results = service.search(&by_title).await.unwrap();
        assert_eq!(results.hits[0].score, None);
    }

    #[tokio::test]
    async fn test_store_sort_is_passed_through() {
        let mut store = MockStore::new();
        store
            .expect_find()
            .withf(|filter| {
                filter.sort
                    == Some(SortSpec::new(
                        SortField::Meta("date_enacted".to_string()),
                        SortDirection::Descending,
                    ))
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));
        store.expect_terms_of().never();

        let service = SearchService::new(Arc::new(store), &RankwellConfig::default());
        let results = service
            .search(&SearchRequest::new().orderby("enacted"))
            .await
            .unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_store_errors_surface() {
        let mut store = MockStore::new();
        store
            .expect_find()
            .returning(|_| Err(StorageError::Connection("refused".to_string())));

        let service = SearchService::new(Arc::new(store), &RankwellConfig::default());
        let err = service.search(&SearchRequest::new()).await.unwrap_err();

        match err {
            RankwellError::Storage(StorageError::Connection(message)) => {
                assert_eq!(message, "refused")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_terms_errors_surface() {
        let mut store = MockStore::new();
        store
            .expect_find()
            .returning(|_| Ok(vec![Document::new(1, "Water", "")]));
        store
            .expect_terms_of()
            .returning(|_, _| Err(StorageError::NotFound("document 1".to_string())));

        let service = SearchService::new(Arc::new(store), &RankwellConfig::default());
        let err = service
            .search(&SearchRequest::new().topics([5i64]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RankwellError::Storage(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_service_over_trait_object() {
        let store: Arc<dyn DocumentStore> = Arc::new(InMemoryStore::with_documents(corpus()));
        let service = SearchService::new(store, &RankwellConfig::default());

        let results = service
            .search(&SearchRequest::new().keyword("budget"))
            .await
            .unwrap();

        let ids: Vec<u64> = results.documents().map(|d| d.id).collect();
        assert_eq!(ids, vec![3]);
    }
}
