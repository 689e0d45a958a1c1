use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".protonames.toml";

/// Resolved settings after all layers are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Extra initialisms on top of the built-in `url`, `http`, `https`.
    pub initialisms: Vec<String>,
    pub format: String,
    pub color: bool,
}

/// One config file layer. Unset keys leave the lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub initialisms: Vec<String>,
    pub format: Option<String>,
    pub color: Option<bool>,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initialisms: Vec::new(),
            format: default_format(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        format: Option<String>,
        no_color: bool,
        cli_initialisms: Vec<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            debug!(path = %local_path.display(), "loading local config");
            config = config.merge(Self::from_file(&local_path)?);
        }

        if let Some(format) = format {
            config.format = format;
        }
        if no_color {
            config.color = false;
        }
        config.initialisms.extend(cli_initialisms);
        config.normalize();

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, layer: ConfigFile) -> Self {
        self.initialisms.extend(layer.initialisms);
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        self
    }

    fn normalize(&mut self) {
        for word in &mut self.initialisms {
            *word = word.to_lowercase();
        }
        self.initialisms.sort();
        self.initialisms.dedup();
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "protonames").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
