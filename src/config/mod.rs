//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// PostgreSQL connection string (used by the `postgres` feature;
    /// the in-memory stores are used when unset)
    pub database_url: Option<String>,

    /// Upload endpoint settings
    pub upload: UploadConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            database_url: None,
            upload: UploadConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("failed to parse config file '{}'", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

/// Upload endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Root of the public static directory
    pub public_dir: PathBuf,

    /// URL prefix uploaded images are served under; also names the
    /// subdirectory of `public_dir` they are written to
    pub route_prefix: String,

    /// When set, uploads are run through the lossy PNG compressor
    /// instead of being copied verbatim
    pub compression: Option<CompressionConfig>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            route_prefix: "/customers".to_string(),
            compression: None,
        }
    }
}

impl UploadConfig {
    /// Directory uploaded images are written to
    pub fn customers_dir(&self) -> PathBuf {
        self.public_dir.join(self.route_prefix.trim_matches('/'))
    }
}

/// Lossy PNG compression settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Quality setting, 1-100 (higher is better)
    pub quality: u8,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self { quality: 80 }
    }
}
