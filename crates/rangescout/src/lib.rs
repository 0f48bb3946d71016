//! Sweep a network range for exposed hosts via Shodan and Hunter.how.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rangescout::{HunterClient, ShodanClient};
//!
//! #[tokio::main]
//! async fn main() -> rangescout::Result<()> {
//!     let shodan = ShodanClient::new("shodan-api-key");
//!     let hunter = HunterClient::new("hunterhow-api-key");
//!
//!     // Resolve a domain to its announcing range first if needed
//!     let range = rangescout::resolve_to_range("example.com").await?;
//!
//!     let mut hosts = shodan.search().range_endpoints(&range).await?;
//!     hosts.extend(hunter.search_endpoints(&range).await?);
//!
//!     for endpoint in hosts {
//!         println!("{endpoint}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

// Re-export core types
pub use rangescout_core::*;

// Re-export clients
pub use rangescout_client::{HunterClient, HunterClientBuilder, ShodanClient, ShodanClientBuilder};

// Re-export target resolution
pub use rangescout_recon::{
    classify, is_address, is_network_range, resolve_to_range, AsnResolver, ReconError,
    TargetKind,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
