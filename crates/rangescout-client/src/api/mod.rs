//! API endpoint wrappers.

mod search;

pub use search::SearchApi;
