//! Server configuration record

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reasons a configuration fails validation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("name is empty")]
    EmptyName,
    #[error("port must be greater than zero")]
    ZeroPort,
}

/// A named server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Human readable server name
    pub name: String,
    /// Listening port
    pub port: u16,
    /// Whether the server is active
    pub enabled: bool,
}

impl Config {
    /// Create a new enabled configuration
    pub fn new(name: &str, port: u16) -> Self {
        Self {
            name: name.to_string(),
            port,
            enabled: true,
        }
    }

    /// Set the server name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set the listening port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enable or disable the server
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Checks the configuration, reporting the first rule it breaks.
    ///
    /// An empty name is reported before a zero port.
    pub fn validate(&self) -> Result<(), ConfigIssue> {
        if self.name.is_empty() {
            return Err(ConfigIssue::EmptyName);
        }
        if self.port == 0 {
            return Err(ConfigIssue::ZeroPort);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// `"enabled"` or `"disabled"`
    pub fn status(&self) -> &'static str {
        if self.enabled {
            "enabled"
        } else {
            "disabled"
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.name, self.port, self.status())
    }
}
