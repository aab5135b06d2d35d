use rankwell::config::{ConfigLoader, RankwellConfig};
use rankwell::core::SearchService;
use rankwell::storage::InMemoryStore;
use std::path::Path;
use std::sync::Arc;

pub struct RankwellCliContext {
    pub config: RankwellConfig,
}

impl RankwellCliContext {
    /// Load configuration from default locations, an optional explicit file
    /// and the environment, in that order of precedence
    pub fn new(config_path: Option<&Path>) -> rankwell::Result<Self> {
        let mut loader = ConfigLoader::new().with_default_files()?;
        if let Some(path) = config_path {
            loader = loader.with_file(path)?;
        }
        let config = loader.with_env().extract()?;

        Ok(Self { config })
    }

    pub fn with_config(config: RankwellConfig) -> Self {
        Self { config }
    }

    /// Build a search service over a corpus file
    pub async fn service(&self, corpus: &Path) -> rankwell::Result<SearchService<InMemoryStore>> {
        let store = InMemoryStore::from_json_file(corpus).await?;
        Ok(SearchService::new(Arc::new(store), &self.config))
    }
}
