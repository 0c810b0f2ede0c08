//! Server Manager - registry of named server configurations
//!
//! Stores validated configurations in insertion order and reports them as a
//! console listing plus a JSON summary.

pub mod app;
pub mod config;
pub mod logging;
pub mod manager;
pub mod report;

// Test modules are inline within each module file

// Re-export commonly used types
pub use config::{Config, ConfigIssue};
pub use manager::{ManagerError, ServerManager};
pub use report::{listing_line, Summary};

/// Current version of the application
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
