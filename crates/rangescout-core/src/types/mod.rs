//! Typed representations of the search service responses.

mod hunter;
mod shodan;

pub use hunter::{HunterData, HunterEntry, HunterResponse};
pub use shodan::{SearchMatch, SearchResults};
