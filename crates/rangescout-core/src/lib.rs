//! Core types for the rangescout network sweep tool.
//!
//! This crate provides the foundational types shared by the service clients
//! and the CLI:
//!
//! - **Types**: Typed representations of the Shodan and Hunter.how search
//!   responses
//! - **Errors**: Error handling with [`ScoutError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use rangescout_core::{SearchResults, Result};
//!
//! fn endpoints(results: &SearchResults) -> Vec<String> {
//!     results.endpoints()
//! }
//! ```

mod error;
pub mod types;

pub use error::{Result, ScoutError};
pub use types::*;
