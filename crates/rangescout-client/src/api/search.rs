//! Search API endpoints.

use crate::ShodanClient;
use rangescout_core::{Result, SearchResults};

/// Search API endpoints
pub struct SearchApi<'a> {
    client: &'a ShodanClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a ShodanClient) -> Self {
        Self { client }
    }

    /// Search for services within a network range.
    ///
    /// Issues a `net:<range>` query and returns the first page of results.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let results = client.search().range("198.51.100.0/24").await?;
    /// for endpoint in results.endpoints() {
    ///     println!("{endpoint}");
    /// }
    /// ```
    pub async fn range(&self, range: &str) -> Result<SearchResults> {
        let query = format!("net:{range}");
        self.client
            .get_with_query("/shodan/host/search", &[("query", &query)])
            .await
    }

    /// Search for services within a network range, returning `address:port`
    /// strings for every match in the first page.
    pub async fn range_endpoints(&self, range: &str) -> Result<Vec<String>> {
        Ok(self.range(range).await?.endpoints())
    }
}
