#[cfg(test)]
mod tests {
    use crate::config::{
        ConfigBuilder, ConfigError, ConfigLoader, LogFormat, LogLevel, RankwellConfig, validation,
    };
    use crate::models::TermField;
    use crate::search::WeightingConfig;
    use crate::storage::filters::{SortDirection, SortField, SortSpec};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RankwellConfig::default();
        assert_eq!(config.search.document_type, "policy");
        assert_eq!(config.search.status, "publish");
        assert_eq!(config.search.topic_taxonomy, "policy_topics");
        assert_eq!(config.search.topic_field, TermField::Id);
        assert_eq!(config.search.default_sort, "relevance");
        assert_eq!(config.search.field_sorts.len(), 3);
        assert_eq!(config.scoring, WeightingConfig::policy_search());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_document_type("report")
            .with_topic_taxonomy("regions", TermField::Slug)
            .with_field_sort(
                "budget",
                SortSpec::new(SortField::Meta("budget".into()), SortDirection::Descending),
            )
            .with_scoring(WeightingConfig::new().with_title_keyword(2.0))
            .with_log_level(LogLevel::Debug)
            .build()
            .unwrap();

        assert_eq!(config.search.document_type, "report");
        assert_eq!(config.search.topic_taxonomy, "regions");
        assert_eq!(config.search.topic_field, TermField::Slug);
        assert!(config.search.field_sorts.contains_key("budget"));
        assert_eq!(config.scoring.title_keyword, Some(2.0));
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_validation() {
        assert!(ConfigBuilder::new().build().is_ok());
        assert!(validation::validate_config(&RankwellConfig::default()).is_ok());

        let empty_type = ConfigBuilder::new().with_document_type("  ").build();
        assert!(matches!(empty_type, Err(ConfigError::ValidationError(_))));

        let negative = ConfigBuilder::new()
            .with_scoring(WeightingConfig::new().with_taxonomy("policy_topics", -3.0))
            .build();
        assert!(matches!(negative, Err(ConfigError::ValidationError(_))));

        let empty_sort_key = ConfigBuilder::new()
            .with_field_sort(
                "broken",
                SortSpec::new(SortField::Meta(String::new()), SortDirection::Ascending),
            )
            .build();
        assert!(empty_sort_key.is_err());
    }

    #[test]
    fn test_predefined_configs() {
        let dev = ConfigBuilder::development().build().unwrap();
        let test = ConfigBuilder::testing().build().unwrap();
        let prod = ConfigBuilder::production().build().unwrap();

        assert_eq!(dev.logging.level, LogLevel::Debug);
        assert_eq!(dev.logging.format, LogFormat::Pretty);
        assert_eq!(test.logging.level, LogLevel::Warn);
        assert_eq!(prod.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_config_serialization() {
        let config = ConfigBuilder::new()
            .with_metadata_key("agency_type")
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RankwellConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_loader_merges_toml_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[search]
document_type = "report"

[search.field_sorts.budget]
field = {{ meta = "budget" }}
direction = "descending"

[scoring]
title_keyword = 2.0

[scoring.tax_query]
regions = 4.0
"#
        )
        .unwrap();

        let config = ConfigLoader::new().with_file(file.path()).unwrap().extract().unwrap();

        assert_eq!(config.search.document_type, "report");
        assert_eq!(config.search.status, "publish");
        assert_eq!(config.search.field_sorts.len(), 4);
        assert_eq!(config.scoring.title_keyword, Some(2.0));
        assert_eq!(config.scoring.tax_query.get("regions"), Some(&4.0));
        assert_eq!(config.scoring.tax_query.get("policy_topics"), Some(&15.0));
    }

    #[test]
    fn test_loader_rejects_missing_and_unknown_files() {
        assert!(matches!(
            ConfigLoader::new().with_file("/definitely/not/here.toml"),
            Err(ConfigError::FileLoadError(_))
        ));

        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(
            ConfigLoader::new().with_file(file.path()),
            Err(ConfigError::FileLoadError(_))
        ));
    }

    #[test]
    fn test_broken_discovered_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("rankwell.toml");
        let valid = dir.path().join("rankwell.json");
        std::fs::write(&broken, "[search\ndocument_type = ").unwrap();
        std::fs::write(&valid, r#"{"search": {"document_type": "page"}}"#).unwrap();

        let err = ConfigLoader::new()
            .with_first_existing([&broken, &valid])
            .unwrap_err();

        match err {
            ConfigError::ParseError(message) => {
                assert!(message.contains("rankwell.toml"), "{message}")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_first_existing_skips_absent_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join(".rankwell");
        std::fs::create_dir(&nested).unwrap();
        let yaml = nested.join("config.yaml");
        std::fs::write(&yaml, "search:\n  document_type: page\n").unwrap();

        let loader = ConfigLoader::new()
            .with_first_existing([dir.path().join("rankwell.toml"), yaml.clone()])
            .unwrap();
        assert_eq!(loader.sources(), &[yaml]);
        assert_eq!(loader.extract().unwrap().search.document_type, "page");

        let untouched = ConfigLoader::new()
            .with_first_existing([dir.path().join("absent.toml")])
            .unwrap();
        assert!(untouched.sources().is_empty());
        assert_eq!(untouched.extract().unwrap(), RankwellConfig::default());
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("base.toml");
        let local = dir.path().join("local.json");
        std::fs::write(&base, "[search]\ndocument_type = \"report\"\nstatus = \"draft\"\n").unwrap();
        std::fs::write(&local, r#"{"search": {"document_type": "page"}}"#).unwrap();

        let config = ConfigLoader::new()
            .with_file(&base)
            .unwrap()
            .with_file(&local)
            .unwrap()
            .extract()
            .unwrap();

        assert_eq!(config.search.document_type, "page");
        assert_eq!(config.search.status, "draft");
    }

    #[test]
    fn test_loader_rejects_invalid_weights() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"scoring": {{"content_keyword": -1.0}}}}"#).unwrap();

        let result = ConfigLoader::new().with_file(file.path()).unwrap().extract();
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
