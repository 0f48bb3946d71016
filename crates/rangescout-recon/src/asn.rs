//! Network-range resolution via the external `asnmap` utility.

use crate::error::{ReconError, ReconResult};
use crate::target::{extract_range, is_address};
use tokio::process::Command;
use tracing::debug;

/// Default lookup binary, expected on PATH
const DEFAULT_BINARY: &str = "asnmap";

/// Resolves an address or domain to its announcing network range.
///
/// The utility is invoked with a discrete argument vector: `-i <addr>` for
/// addresses, `-d <domain>` for domains, plus `-silent`. Its stdout is
/// scanned for the first network-range substring.
pub struct AsnResolver {
    binary: String,
}

impl Default for AsnResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AsnResolver {
    /// Create a resolver using the `asnmap` binary on PATH
    #[must_use]
    pub fn new() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
        }
    }

    /// Use a specific lookup binary (useful for testing)
    #[must_use]
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Resolve `target` to its enclosing network range.
    pub async fn resolve(&self, target: &str) -> ReconResult<String> {
        let flag = if is_address(target) { "-i" } else { "-d" };
        debug!(host = target, mode = flag, "resolving network range");

        let output = Command::new(&self.binary)
            .args([flag, target, "-silent"])
            .output()
            .await
            .map_err(|e| ReconError::Lookup(format!("failed to run {}: {e}", self.binary)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReconError::Lookup(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        extract_range(&stdout)
            .map(str::to_string)
            .ok_or_else(|| ReconError::NoRangeFound {
                target: target.to_string(),
            })
    }
}

/// Resolve `target` with the default resolver.
pub async fn resolve_to_range(target: &str) -> ReconResult<String> {
    AsnResolver::new().resolve(target).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_a_lookup_error() {
        let resolver = AsnResolver::with_binary("rangescout-no-such-binary");
        let err = resolver.resolve("192.0.2.1").await.unwrap_err();
        assert!(matches!(err, ReconError::Lookup(_)));
    }

    #[tokio::test]
    async fn test_output_without_range_is_not_found() {
        // `echo` prints the argument vector back, which contains no range.
        let resolver = AsnResolver::with_binary("echo");
        let err = resolver.resolve("example.com").await.unwrap_err();
        match err {
            ReconError::NoRangeFound { target } => assert_eq!(target, "example.com"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
