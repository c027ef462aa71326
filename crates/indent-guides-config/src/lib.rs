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

    #[error("Invalid file pattern '{pattern}' in config: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Tab size must be at least 1 (found 0 for '{scope}')")]
    ZeroTabSize { scope: String },
}

pub const DEFAULT_TAB_SIZE: usize = 4;

fn default_tab_size() -> usize {
    DEFAULT_TAB_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<TabSizeOverride>,
}

/// Tab size for files matching a glob pattern, e.g. `*.go` or `vendor/**`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSizeOverride {
    pub pattern: String,
    pub tab_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_size: DEFAULT_TAB_SIZE,
            overrides: Vec::new(),
        }
    }
}

impl Config {
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

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate()?;

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
        let config_dir = shellexpand::tilde("~/.config/indent-guides");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Checks tab sizes are positive and every override pattern compiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_size == 0 {
            return Err(ConfigError::ZeroTabSize {
                scope: "tab_size".to_string(),
            });
        }
        for entry in &self.overrides {
            entry.compile()?;
            if entry.tab_size == 0 {
                return Err(ConfigError::ZeroTabSize {
                    scope: entry.pattern.clone(),
                });
            }
        }
        Ok(())
    }

    /// Tab size for `path`: the first override whose pattern matches the full
    /// path or its file name, otherwise the default.
    pub fn tab_size_for(&self, path: &Path) -> Result<usize, ConfigError> {
        let file_name = path.file_name().map(Path::new);
        for entry in &self.overrides {
            let pattern = entry.compile()?;
            if pattern.matches_path(path) || file_name.is_some_and(|name| pattern.matches_path(name))
            {
                return Ok(entry.tab_size);
            }
        }
        Ok(self.tab_size)
    }
}

impl TabSizeOverride {
    fn compile(&self) -> Result<glob::Pattern, ConfigError> {
        glob::Pattern::new(&self.pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: self.pattern.clone(),
            source,
        })
    }
}
