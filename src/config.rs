use crate::converter::tokenizer::DEFAULT_DELIMITERS;
use crate::converter::Scheme;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scheme: Scheme,

    /// Extra delimiter characters; whitespace always delimits
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<char>,
}

fn default_delimiters() -> Vec<char> {
    DEFAULT_DELIMITERS.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: Scheme::default(),
            delimiters: default_delimiters(),
        }
    }
}

/// One source of settings: a config file or the command line.
///
/// Only fields that are present override the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    pub scheme: Option<Scheme>,
    pub delimiters: Option<Vec<char>>,
}

impl ConfigLayer {
    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        debug!(path = %path.display(), "Reading config file");
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(scheme: Option<Scheme>, delimiters: Option<Vec<char>>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        config = config.merge_local(Path::new("."))?;
        config = config.merge(ConfigLayer { scheme, delimiters });

        debug!(scheme = %config.scheme, delimiters = ?config.delimiters, "Loaded configuration");
        Ok(config)
    }

    /// Merge `.recase.toml` from `dir` over this configuration, if present
    fn merge_local(self, dir: &Path) -> Result<Self> {
        let local_path = dir.join(LOCAL_CONFIG_FILE);
        if !local_path.exists() {
            return Ok(self);
        }
        Ok(self.merge(ConfigLayer::from_file(&local_path)?))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(scheme) = layer.scheme {
            self.scheme = scheme;
        }
        if let Some(delimiters) = layer.delimiters {
            if delimiters.iter().any(|c| c.is_whitespace()) {
                warn!(?delimiters, "Whitespace is always a delimiter; listing it has no effect");
            }
            self.delimiters = delimiters;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
