//! Configuration Management
//!
//! Optional defaults for cfn-pull, read from `<config_dir>/cfn-pull/config.json`.

use crate::aws::client::ClientOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// AWS region to query
    #[serde(default)]
    pub region: Option<String>,
    /// Named AWS profile
    #[serde(default)]
    pub profile: Option<String>,
    /// CloudFormation endpoint override
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.json"))
    }

    /// Log file written when `--log-level` is not `off`
    pub fn log_path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("cfn-pull.log"))
    }

    fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cfn-pull"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Client options (CLI > config > AWS environment)
    pub fn client_options(
        &self,
        region: Option<String>,
        profile: Option<String>,
        endpoint_url: Option<String>,
    ) -> ClientOptions {
        ClientOptions {
            region: region.or_else(|| self.region.clone()),
            profile: profile.or_else(|| self.profile.clone()),
            endpoint_url: endpoint_url.or_else(|| self.endpoint_url.clone()),
        }
    }
}
