use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "agora.json";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9292";

/// Client settings, read from a JSON file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,

    /// Quiet period for free-text fields, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            debounce_ms: 1000,
        }
    }
}

impl ClientConfig {
    /// Loads `path` when given; otherwise `./agora.json` if it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => {
                if !p.is_file() {
                    return Err(anyhow!("config file {} not found", p.display()));
                }
                p.to_path_buf()
            }
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.is_file() {
                    return Ok(Self::default());
                }
                p
            }
        };
        Self::read(&path)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", path.display()))?;
        if cfg.base_url.trim().is_empty() {
            anyhow::bail!("{}: base_url cannot be empty", path.display());
        }
        Ok(cfg)
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, base_url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if token.is_some() {
            self.token = token;
        }
        self
    }

    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
