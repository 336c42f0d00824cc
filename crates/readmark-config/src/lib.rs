use readmark_engine::{ParserOptions, SearchOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub library_path: PathBuf,
    #[serde(default)]
    pub parser: ParserSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

/// `[parser]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    pub max_nesting_depth: usize,
}

impl Default for ParserSettings {
    fn default() -> Self {
        let defaults = ParserOptions::default();
        Self {
            max_nesting_depth: defaults.max_nesting_depth,
        }
    }
}

impl From<ParserSettings> for ParserOptions {
    fn from(settings: ParserSettings) -> Self {
        ParserOptions {
            max_nesting_depth: settings.max_nesting_depth,
        }
    }
}

/// `[search]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub case_sensitive: bool,
}

impl From<SearchSettings> for SearchOptions {
    fn from(settings: SearchSettings) -> Self {
        SearchOptions {
            case_sensitive: settings.case_sensitive,
        }
    }
}

impl Config {
    pub fn new(library_path: impl Into<PathBuf>) -> Self {
        Self {
            library_path: library_path.into(),
            parser: ParserSettings::default(),
            search: SearchSettings::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.library_path =
            Self::expand_path(&config.library_path).unwrap_or(config.library_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/readmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn parser_options(&self) -> ParserOptions {
        self.parser.into()
    }

    pub fn search_options(&self) -> SearchOptions {
        self.search.into()
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
