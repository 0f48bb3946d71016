use serde::{Deserialize, Serialize};

/// Response envelope from the Hunter.how /search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HunterResponse {
    /// Service status code (200 on success)
    #[serde(default)]
    pub code: Option<i64>,

    /// Human-readable status message
    #[serde(default)]
    pub message: Option<String>,

    /// Result payload
    #[serde(default)]
    pub data: HunterData,
}

impl HunterResponse {
    /// Returns one `address:port` string per result entry, in response order
    #[must_use]
    pub fn endpoints(&self) -> Vec<String> {
        self.data.list.iter().map(HunterEntry::endpoint).collect()
    }
}

/// Result payload under the `data` key
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HunterData {
    /// Matching hosts for the requested page
    #[serde(default)]
    pub list: Vec<HunterEntry>,

    /// Total number of results across all pages
    #[serde(default)]
    pub total: u64,
}

/// Individual host entry in the result list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HunterEntry {
    /// IP address as string
    pub ip: String,

    /// Port number
    pub port: u16,

    /// Associated domain, if any
    #[serde(default)]
    pub domain: Option<String>,
}

impl HunterEntry {
    /// Returns the `address:port` form of this entry
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
