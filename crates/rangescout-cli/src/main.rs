//! rangescout - sweep a network range for exposed hosts.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    rangescout_cli::run().await
}
