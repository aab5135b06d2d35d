//! Turning command-line arguments into search requests

use crate::args::QueryArgs;
use rankwell::RankwellError;
use rankwell::query::{SearchRequest, TermValue, split_list};
use rankwell::search::WeightingConfig;

/// Parse a `dimension=weight` override
pub fn parse_taxonomy_weight(value: &str) -> rankwell::Result<(String, f32)> {
    let (dimension, weight) = value.split_once('=').ok_or_else(|| {
        RankwellError::InvalidRequest(format!(
            "Invalid taxonomy weight '{}': expected DIMENSION=WEIGHT",
            value
        ))
    })?;

    let dimension = dimension.trim();
    if dimension.is_empty() {
        return Err(RankwellError::InvalidRequest(format!(
            "Invalid taxonomy weight '{}': empty dimension",
            value
        )));
    }

    let weight = weight.trim().parse::<f32>().map_err(|e| {
        RankwellError::InvalidRequest(format!("Invalid taxonomy weight '{}': {}", value, e))
    })?;

    Ok((dimension.to_string(), weight))
}

/// Build a search request from query arguments
///
/// Weight overrides are layered over `base`, so unmentioned weights keep
/// their configured values.
pub fn build_request(args: &QueryArgs, base: &WeightingConfig) -> rankwell::Result<SearchRequest> {
    let mut request = SearchRequest::new();

    if let Some(keyword) = &args.keyword {
        request = request.keyword(keyword.as_str());
    }

    if let Some(topics) = &args.topics {
        request = request.topics(split_list(topics).into_iter().map(|topic| {
            match topic.parse::<i64>() {
                Ok(id) => TermValue::Number(id),
                Err(_) => TermValue::Text(topic),
            }
        }));
    }

    if let Some(types) = &args.types {
        request = request.metadata_values(split_list(types));
    }

    if let Some(orderby) = &args.orderby {
        request = request.orderby(orderby.as_str());
    }

    let has_overrides = args.title_weight.is_some()
        || args.content_weight.is_some()
        || !args.taxonomy_weights.is_empty();

    if has_overrides {
        let mut weighting = base.clone();
        if let Some(weight) = args.title_weight {
            weighting = weighting.with_title_keyword(weight);
        }
        if let Some(weight) = args.content_weight {
            weighting = weighting.with_content_keyword(weight);
        }
        for value in &args.taxonomy_weights {
            let (dimension, weight) = parse_taxonomy_weight(value)?;
            weighting = weighting.with_taxonomy(dimension, weight);
        }
        request = request.weighting(weighting);
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> QueryArgs {
        QueryArgs {
            corpus: PathBuf::from("corpus.json"),
            ..Default::default()
        }
    }

    #[test]
    fn test_topics_parse_numbers_and_slugs() {
        let args = QueryArgs {
            topics: Some("5, 9,water,".to_string()),
            ..args()
        };

        let request = build_request(&args, &WeightingConfig::policy_search()).unwrap();

        assert_eq!(
            request.topics,
            vec![
                TermValue::Number(5),
                TermValue::Number(9),
                TermValue::Text("water".to_string())
            ]
        );
        assert!(request.weighting.is_none());
    }

    #[test]
    fn test_weight_overrides_layer_over_base() {
        let args = QueryArgs {
            title_weight: Some(3.0),
            taxonomy_weights: vec!["regions=2.5".to_string()],
            ..args()
        };

        let request = build_request(&args, &WeightingConfig::policy_search()).unwrap();
        let weighting = request.weighting.unwrap();

        assert_eq!(weighting.title_keyword, Some(3.0));
        assert_eq!(weighting.content_keyword, Some(0.25));
        assert_eq!(weighting.tax_query.get("policy_topics"), Some(&15.0));
        assert_eq!(weighting.tax_query.get("regions"), Some(&2.5));
    }

    #[test]
    fn test_parse_taxonomy_weight_errors() {
        assert!(parse_taxonomy_weight("policy_topics").is_err());
        assert!(parse_taxonomy_weight("=3").is_err());
        assert!(parse_taxonomy_weight("policy_topics=heavy").is_err());
        assert_eq!(
            parse_taxonomy_weight(" policy_topics = 7 ").unwrap(),
            ("policy_topics".to_string(), 7.0)
        );
    }
}
