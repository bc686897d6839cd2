// ABOUTME: Configuration management for the domtemplate application
// ABOUTME: Handles loading configuration from YAML files and environment variable overrides

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::template::Markers;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub markers: Markers,

    #[serde(default)]
    pub template_vars: HashMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                return Err(anyhow!("Configuration file not found: {}", p.display()));
            }
            Some(p) => p,
            None => Self::find_config_file(),
        };

        // Only the default search location may be absent
        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Config::default()
        };

        config.merge_env();
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = [
            "domtemplate.yaml",
            "domtemplate.yml",
            ".domtemplate.yaml",
            ".domtemplate.yml",
        ];

        for path in possible_paths {
            let path = PathBuf::from(path);
            if path.exists() {
                return path;
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".domtemplate").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        // Default path (may not exist)
        PathBuf::from("domtemplate.yaml")
    }

    fn merge_env(&mut self) {
        self.merge_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an environment lookup
    pub fn merge_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("DOMTEMPLATE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DOMTEMPLATE_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(open) = lookup("DOMTEMPLATE_MARKER_OPEN") {
            self.markers.open = open;
        }
        if let Some(close) = lookup("DOMTEMPLATE_MARKER_CLOSE") {
            self.markers.close = close;
        }
    }
}
