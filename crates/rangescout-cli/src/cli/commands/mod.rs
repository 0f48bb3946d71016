//! Command implementations.

pub mod config;
pub mod sweep;

use std::path::PathBuf;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Shodan API key override from flag or environment
    pub shodan_key: Option<String>,

    /// Hunter.how API key override from flag or environment
    pub hunter_key: Option<String>,

    /// Credentials file location
    pub config_path: PathBuf,

    /// Verbose output
    pub verbose: bool,
}
