use std::path::Path;
use std::time::Duration;

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::http::buffer::DEFAULT_CAPACITY;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_PATH_ENV: &str = "HTTPFROMTCP_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    /// Read buffer capacity per connection, in bytes
    pub buffer_capacity: usize,
    pub read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:42069".to_string(),
            buffer_capacity: DEFAULT_CAPACITY,
            read_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Loads defaults, then the YAML file named by `HTTPFROMTCP_CONFIG` if
    /// set, then the `LISTEN`, `BUFFER_SIZE` and `READ_TIMEOUT_SECS`
    /// environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.listen_addr = listen_addr;
        }
        if let Ok(size) = std::env::var("BUFFER_SIZE") {
            cfg.buffer_capacity = size
                .parse()
                .with_context(|| format!("invalid BUFFER_SIZE '{size}'"))?;
        }
        if let Ok(secs) = std::env::var("READ_TIMEOUT_SECS") {
            cfg.read_timeout_secs = secs
                .parse()
                .with_context(|| format!("invalid READ_TIMEOUT_SECS '{secs}'"))?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("failed to load config file {}", path.display()))
    }

    /// Parses a YAML document; missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let cfg: Self = serde_yaml::from_str(yaml).context("invalid config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.buffer_capacity == 0 {
            bail!("buffer_capacity must be greater than zero");
        }
        Ok(())
    }
}
