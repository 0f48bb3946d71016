//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Sweep a network range for exposed hosts.
///
/// Queries Shodan and Hunter.how for services within a CIDR range, merges
/// and deduplicates the results, and writes them to a file. A bare IP or
/// domain is first resolved to its announcing range with asnmap.
#[derive(Parser, Debug)]
#[command(name = "rangescout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Shodan API key (or set SHODAN_API_KEY env var)
    #[arg(long, env = "SHODAN_API_KEY", global = true)]
    pub shodan_key: Option<String>,

    /// Hunter.how API key (or set HUNTERHOW_API_KEY env var)
    #[arg(long, env = "HUNTERHOW_API_KEY", global = true)]
    pub hunter_key: Option<String>,

    /// Path to the credentials file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sweep a range, IP, or domain for exposed hosts
    Sweep(SweepArgs),

    /// Manage stored API keys
    Config(ConfigArgs),
}

// ============================================================================
// Sweep command
// ============================================================================

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Network range, IP address, or domain (prompted for if omitted)
    pub target: Option<String>,

    /// File the merged results are written to
    #[arg(short, long, default_value = "results.txt")]
    pub output: PathBuf,
}

impl SweepArgs {
    /// Arguments for a bare `rangescout` invocation: prompt for everything.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            target: None,
            output: PathBuf::from("results.txt"),
        }
    }
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show stored keys (masked)
    Show,

    /// Set a stored key
    Set {
        /// Key to set (shodan_api_key or hunterhow_api_key)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show the credentials file path
    Path,
}
