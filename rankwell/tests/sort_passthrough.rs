//! Non-relevance sort modes are delegated to the store untouched

use rankwell::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn corpus() -> Vec<Document> {
    vec![
        Document::builder(1, "Beta Act")
            .content("water")
            .meta("date_enacted", json!("20180101"))
            .meta("agency_type", json!("state"))
            .build(),
        Document::builder(2, "alpha rule")
            .content("water water water")
            .meta("date_enacted", json!("20210101"))
            .meta("agency_type", json!("federal"))
            .build(),
        Document::builder(3, "Gamma Order")
            .content("water")
            .build(),
    ]
}

async fn search(orderby: &str) -> SearchResults {
    SearchService::new(
        Arc::new(InMemoryStore::with_documents(corpus())),
        &RankwellConfig::default(),
    )
    .search(&SearchRequest::new().keyword("water").orderby(orderby))
    .await
    .unwrap()
}

fn ids(results: &SearchResults) -> Vec<u64> {
    results.documents().map(|d| d.id).collect()
}

#[tokio::test]
async fn test_title_sort() {
    let results = search("title").await;
    assert_eq!(results.sort, "title");
    assert_eq!(ids(&results), vec![2, 1, 3]);
    assert!(results.hits.iter().all(|h| h.score.is_none()));
}

#[tokio::test]
async fn test_named_field_sorts() {
    // Missing fields sort last
    assert_eq!(ids(&search("enacted").await), vec![2, 1, 3]);
    assert_eq!(ids(&search("agencytype").await), vec![2, 1, 3]);
}

#[tokio::test]
async fn test_suffix_field_sort() {
    assert_eq!(ids(&search("date_enacted_asc").await), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_unknown_token_keeps_store_order() {
    let results = search("popularity").await;
    assert_eq!(ids(&results), vec![1, 2, 3]);
    assert!(results.hits.iter().all(|h| h.breakdown.is_none()));
}

#[tokio::test]
async fn test_relevance_reorders_by_score() {
    let results = search("RELEVANCE").await;
    assert_eq!(results.sort, "relevance");
    assert_eq!(ids(&results), vec![2, 1, 3]);
    assert_eq!(results.hits[0].score, Some(0.75));
}
