//! End-to-end relevance ranking through the search service

use rankwell::prelude::*;
use std::sync::Arc;

fn water() -> Term {
    Term::new(5, "water", "Water")
}

fn land() -> Term {
    Term::new(9, "land", "Land")
}

fn service(documents: Vec<Document>) -> SearchService<InMemoryStore> {
    SearchService::new(
        Arc::new(InMemoryStore::with_documents(documents)),
        &RankwellConfig::default(),
    )
}

fn ids(results: &SearchResults) -> Vec<u64> {
    results.documents().map(|d| d.id).collect()
}

#[tokio::test]
async fn test_keyword_and_topic_example() {
    // A: "Water Rights Act" with topic 5; B: topics 5 and 9, keyword in body only
    let a = Document::builder(1, "Water Rights Act")
        .terms("policy_topics", vec![water()])
        .build();
    let b = Document::builder(2, "Land Use")
        .content("Regulates water")
        .terms("policy_topics", vec![water(), land()])
        .build();

    let results = service(vec![a, b])
        .search(&SearchRequest::new().keyword("water").topics([5i64, 9]))
        .await
        .unwrap();

    assert_eq!(ids(&results), vec![2, 1]);
    assert_eq!(results.hits[0].score, Some(15.25));
    assert_eq!(results.hits[1].score, Some(4.75));

    let breakdown = results.hits[1].breakdown.unwrap();
    assert_eq!(breakdown.keyword, 1.0);
    assert_eq!(breakdown.taxonomy, 3.75);
}

#[tokio::test]
async fn test_pure_ranking_example() {
    let a = Document::builder(1, "Water Rights Act")
        .terms("policy_topics", vec![water()])
        .build();
    let b = Document::builder(2, "Land Use")
        .terms("policy_topics", vec![water(), land()])
        .build();

    let clauses = [TaxonomyClause::any_of(
        "policy_topics",
        TermField::Id,
        [5i64, 9],
    )];
    let weighting = WeightingConfig::policy_search();
    let ranked = rank_by_relevance(vec![a, b], "water", &clauses, Some(&weighting));

    let ids: Vec<u64> = ranked.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_ties_keep_store_order() {
    let documents = (1..=4)
        .map(|id| {
            Document::builder(id, format!("Policy {}", id))
                .terms("policy_topics", vec![water()])
                .build()
        })
        .collect();
    let service = service(documents);
    let request = SearchRequest::new().topics([5i64]);

    let first = service.search(&request).await.unwrap();
    let second = service.search(&request).await.unwrap();

    assert_eq!(ids(&first), vec![1, 2, 3, 4]);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_request_weighting_overrides_profile() {
    let a = Document::builder(1, "Water Water Water").build();
    let b = Document::builder(2, "Notes")
        .content("water")
        .terms("policy_topics", vec![water()])
        .build();

    let service = service(vec![a, b]);
    let request = SearchRequest::new().keyword("water").topics([5i64]);

    let default = service.search(&request.clone().orderby("relevance")).await.unwrap();
    // Topic 5 is required by the store filter, so only B matches
    assert_eq!(ids(&default), vec![2]);

    let keyword_only = SearchRequest::new()
        .keyword("water")
        .weighting(WeightingConfig::new().with_title_keyword(2.0).with_content_keyword(0.0));
    let results = service.search(&keyword_only).await.unwrap();

    assert_eq!(ids(&results), vec![1, 2]);
    assert_eq!(results.hits[0].score, Some(6.0));
    assert_eq!(results.hits[1].score, Some(0.0));
}

#[tokio::test]
async fn test_negative_override_is_rejected() {
    let service = service(Vec::new());
    let request = SearchRequest::new()
        .keyword("water")
        .weighting(WeightingConfig::new().with_title_keyword(-1.0));

    let err = service.search(&request).await.unwrap_err();
    assert!(matches!(err, RankwellError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_malformed_clauses_parse_and_score_nothing() {
    let a = Document::builder(1, "Water Rights Act")
        .terms("policy_topics", vec![water()])
        .build();
    let b = Document::builder(2, "Land Use")
        .content("Regulates water")
        .terms("policy_topics", vec![water(), land()])
        .build();

    let request: SearchRequest = serde_json::from_value(serde_json::json!({
        "keyword": "water",
        "taxonomy": [
            {"taxonomy": "policy_topics", "operator": "IN", "terms": null},
            {"taxonomy": "policy_topics", "operator": "IN", "terms": {"a": 5}},
            {"taxonomy": "policy_topics", "operator": "IN", "terms": [5.0]}
        ]
    }))
    .unwrap();

    let results = service(vec![a, b]).search(&request).await.unwrap();

    assert_eq!(ids(&results), vec![1, 2]);
    for hit in &results.hits {
        assert_eq!(hit.breakdown.unwrap().taxonomy, 0.0);
    }
    assert_eq!(results.hits[0].score, Some(1.0));
    assert_eq!(results.hits[1].score, Some(0.25));
}
