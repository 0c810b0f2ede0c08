//! In-memory registry of named server configurations
//!
//! Every stored configuration has passed [`Config::validate`]. Keys keep the
//! position of their first insertion, even when the value is later replaced.

use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, ConfigIssue};

/// Errors raised by [`ServerManager`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    #[error("Invalid config for '{key}': {issue}")]
    InvalidConfig { key: String, issue: ConfigIssue },
}

/// Keyed store of validated server configurations
#[derive(Debug, Default)]
pub struct ServerManager {
    configs: HashMap<String, Config>,
    /// Keys in first-insertion order
    order: Vec<String>,
}

impl ServerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `config` and stores it under `key`.
    ///
    /// An existing entry under the same key is replaced in place. On error the
    /// store is left untouched.
    pub fn add_config(&mut self, key: &str, config: Config) -> Result<(), ManagerError> {
        if let Err(issue) = config.validate() {
            warn!(key, %issue, "rejected configuration");
            return Err(ManagerError::InvalidConfig {
                key: key.to_string(),
                issue,
            });
        }

        info!(
            key,
            name = %config.name,
            port = config.port,
            enabled = config.enabled,
            "added configuration"
        );

        match self.configs.insert(key.to_string(), config) {
            Some(previous) => debug!(key, replaced = %previous, "replaced existing configuration"),
            None => self.order.push(key.to_string()),
        }
        Ok(())
    }

    pub fn get_config(&self, key: &str) -> Option<&Config> {
        self.configs.get(key)
    }

    /// Returns a snapshot of all keys in insertion order
    pub fn list_configs(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Port stored under `key`, or `default` when the key is unknown
    pub fn port_or(&self, key: &str, default: u16) -> u16 {
        match self.get_config(key) {
            Some(config) => config.port,
            None => default,
        }
    }

    /// Iterate over `(key, config)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Config)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.configs.get(key).map(|config| (key.as_str(), config)))
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Number of enabled configurations
    pub fn active_count(&self) -> usize {
        self.configs.values().filter(|c| c.enabled).count()
    }
}
