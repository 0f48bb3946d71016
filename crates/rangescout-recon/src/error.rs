use thiserror::Error;

/// Result type alias for resolution operations
pub type ReconResult<T> = std::result::Result<T, ReconError>;

/// Errors from target resolution
#[derive(Error, Debug)]
pub enum ReconError {
    /// The lookup utility could not be started or exited abnormally
    #[error("ASN lookup failed: {0}")]
    Lookup(String),

    /// The lookup ran but produced no network range
    #[error("no network range found for {target}")]
    NoRangeFound {
        /// The address or domain that was looked up
        target: String,
    },
}

impl From<ReconError> for rangescout_core::ScoutError {
    fn from(err: ReconError) -> Self {
        Self::Resolve(err.to_string())
    }
}
