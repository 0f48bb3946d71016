//! HTTP clients for the search services queried by rangescout.
//!
//! This crate provides the [`ShodanClient`] for the primary (network-range)
//! search service and the [`HunterClient`] for the secondary (host) search
//! service.

mod client;
mod hunter;
pub mod api;

pub use client::{ShodanClient, ShodanClientBuilder};
pub use hunter::{HunterClient, HunterClientBuilder};
pub use rangescout_core::{Result, ScoutError};
