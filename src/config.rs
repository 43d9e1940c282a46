//! Configuration Management
//!
//! Handles persistent configuration storage for azrm. Effective values
//! resolve as CLI flag, then environment, then config file, then default.

use crate::client::{ClientOptions, DEFAULT_ENDPOINT, DEFAULT_POLL_INTERVAL, DEFAULT_USER_AGENT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SUBSCRIPTION_ENV: &str = "AZURE_SUBSCRIPTION_ID";
pub const ENDPOINT_ENV: &str = "AZURE_RESOURCE_MANAGER_ENDPOINT";
/// Only ever read from the environment, never persisted
pub const TOKEN_ENV: &str = "AZURE_ACCESS_TOKEN";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Default subscription for list and show commands
    #[serde(default)]
    pub subscription_id: Option<String>,
    #[serde(default)]
    pub resource_group: Option<String>,
    /// Resource Manager endpoint, for sovereign clouds
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub poll_interval_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("azrm").join("config.json"))
    }

    /// Load configuration from disk, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {:?}: {:#}", path, e);
                Self::default()
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get effective subscription (CLI > env > config)
    pub fn effective_subscription(&self, flag: Option<&str>) -> Option<String> {
        pick(flag, env(SUBSCRIPTION_ENV), self.subscription_id.as_deref())
    }

    /// Get effective resource group (CLI > config)
    pub fn effective_resource_group(&self, flag: Option<&str>) -> Option<String> {
        pick(flag, None, self.resource_group.as_deref())
    }

    /// Get effective endpoint (CLI > env > config > public cloud)
    pub fn effective_endpoint(&self, flag: Option<&str>) -> String {
        pick(flag, env(ENDPOINT_ENV), self.endpoint.as_deref()).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Configured poll interval; zero falls back to the default
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL)
    }

    /// Client settings with the bearer token taken from the environment
    pub fn client_options(&self, endpoint_flag: Option<&str>) -> ClientOptions {
        ClientOptions {
            endpoint: self.effective_endpoint(endpoint_flag),
            token: env(TOKEN_ENV),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            poll_interval: self.poll_interval(),
        }
    }

    /// Set subscription and save
    pub fn set_subscription(&mut self, subscription_id: &str) -> Result<()> {
        self.subscription_id = Some(subscription_id.to_string());
        self.save()
    }

    /// Set resource group and save
    pub fn set_resource_group(&mut self, resource_group: &str) -> Result<()> {
        self.resource_group = Some(resource_group.to_string());
        self.save()
    }
}

fn env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn pick(flag: Option<&str>, env: Option<String>, file: Option<&str>) -> Option<String> {
    flag.map(str::to_string)
        .or(env)
        .or_else(|| file.map(str::to_string))
}
