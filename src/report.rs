//! Console listing and JSON summary for a [`ServerManager`]

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::Config;
use crate::manager::ServerManager;

/// ISO-8601 local date-time with microseconds, e.g. `2026-10-15T09:30:00.123456`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Format a single entry of the configuration listing
pub fn listing_line(key: &str, config: &Config) -> String {
    format!(
        "  {}: {}:{} ({})",
        key,
        config.name,
        config.port,
        config.status()
    )
}

/// Aggregate counts reported after the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub timestamp: String,
    /// Number of stored configurations
    pub configs: usize,
    /// Number of enabled configurations
    pub active: usize,
}

impl Summary {
    pub fn from_manager(manager: &ServerManager, at: NaiveDateTime) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            configs: manager.len(),
            active: manager.active_count(),
        }
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
