//! Layered configuration loading.
//!
//! Built-in defaults sit at the bottom. Discovered files come next, the user
//! config directory before the working directory, followed by an explicit
//! file and finally `RANKWELL_*` environment variables.

use super::{ConfigError, DEFAULT_CONFIG_FILES, ENV_PREFIX, Result, models::*, validation};
use figment::{
    Figment, Provider,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use std::path::{Path, PathBuf};

/// Extensions tried for `config.*` in the user config directory
const USER_CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

#[derive(Debug, Clone, Copy)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn layer(self, path: &Path) -> Figment {
        match self {
            Self::Toml => Figment::from(Toml::file(path)),
            Self::Yaml => Figment::from(Yaml::file(path)),
            Self::Json => Figment::from(Json::file(path)),
        }
    }
}

/// Read one file into its own layer. Syntax errors surface here, naming the
/// file, instead of at extraction time.
fn read_layer(path: &Path) -> Result<Figment> {
    let format = FileFormat::of(path).ok_or_else(|| {
        ConfigError::FileLoadError(format!("Unsupported file format: {}", path.display()))
    })?;

    if !path.is_file() {
        return Err(ConfigError::FileLoadError(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let layer = format.layer(path);
    Provider::data(&layer)
        .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

    Ok(layer)
}

/// Builder over the configuration layers.
///
/// Each `with_*` call adds a layer that overrides everything added before it.
///
/// ```rust,no_run
/// use rankwell::config::ConfigLoader;
///
/// # fn example() -> rankwell::config::Result<()> {
/// let config = ConfigLoader::new()
///     .with_default_files()?
///     .with_file("rankwell.local.toml")?
///     .with_env()
///     .extract()?;
/// # let _ = config;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    figment: Figment,
    sources: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Start from the built-in defaults.
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(RankwellConfig::default())),
            sources: Vec::new(),
        }
    }

    /// Add a configuration file. Missing files, unknown extensions and files
    /// that do not parse are errors.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let layer = read_layer(path)?;

        self.figment = self.figment.merge(layer);
        self.sources.push(path.to_path_buf());
        tracing::debug!(path = %path.display(), "Loaded configuration file");

        Ok(self)
    }

    /// Add the first candidate that exists.
    ///
    /// Absent candidates are passed over. A candidate that exists but cannot
    /// be read is an error; the search does not fall through to the next one.
    pub fn with_first_existing<I, P>(self, candidates: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        match candidates.into_iter().find(|path| path.as_ref().exists()) {
            Some(path) => self.with_file(path),
            None => Ok(self),
        }
    }

    /// Add the first `config.*` in the user config directory, then the first
    /// of [`DEFAULT_CONFIG_FILES`] in the working directory.
    pub fn with_default_files(self) -> Result<Self> {
        let user_files: Vec<PathBuf> =
            directories::ProjectDirs::from("org", "rankwell", "rankwell")
                .map(|dirs| {
                    USER_CONFIG_EXTENSIONS
                        .iter()
                        .map(|ext| dirs.config_dir().join(format!("config.{ext}")))
                        .collect()
                })
                .unwrap_or_default();

        self.with_first_existing(user_files)?
            .with_first_existing(DEFAULT_CONFIG_FILES.iter().map(PathBuf::from))
    }

    /// Add `RANKWELL_*` environment variables.
    ///
    /// `RANKWELL_SEARCH__DOCUMENT_TYPE=page` sets `search.document_type`.
    pub fn with_env(mut self) -> Self {
        self.figment = self.figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        self
    }

    /// Add an arbitrary figment provider.
    pub fn with_provider<T: Provider>(mut self, provider: T) -> Self {
        self.figment = self.figment.merge(provider);
        self
    }

    /// Files layered so far, lowest precedence first.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Extract and validate the configuration.
    pub fn extract(&self) -> Result<RankwellConfig> {
        let config: RankwellConfig = self
            .figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        validation::validate_config(&config)?;

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
