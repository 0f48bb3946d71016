//! # rangescout-cli
//!
//! Command-line interface for sweeping a network range for exposed hosts.
//!
//! ## Features
//!
//! - **Two search services**: merges Shodan and Hunter.how results
//! - **Range resolution**: bare IPs and domains are resolved to their
//!   announcing CIDR via `asnmap`
//! - **Stored credentials**: API keys are prompted for once and persisted
//! - **Deduplicated output**: results land in a plain text file, one
//!   `address:port` per line

pub mod cli;
pub mod config;
pub mod report;

pub use cli::run;
