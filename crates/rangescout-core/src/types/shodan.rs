use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Search results from /shodan/host/search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching banners/services
    pub matches: Vec<SearchMatch>,

    /// Total number of results
    #[serde(default)]
    pub total: u64,
}

impl SearchResults {
    /// Returns true if there are no results
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the number of matches in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns one `address:port` string per match, in response order
    #[must_use]
    pub fn endpoints(&self) -> Vec<String> {
        self.matches.iter().map(SearchMatch::endpoint).collect()
    }
}

/// Individual match in search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    /// IP address (parsed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<IpAddr>,

    /// IP address as string
    pub ip_str: String,

    /// Port number
    pub port: u16,

    /// Hostnames associated with this IP
    #[serde(default)]
    pub hostnames: Vec<String>,

    /// Organization that owns the IP
    #[serde(default)]
    pub org: Option<String>,

    /// Product name
    #[serde(default)]
    pub product: Option<String>,

    /// Timestamp
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl SearchMatch {
    /// Returns the IP address, parsing from string if needed
    #[must_use]
    pub fn ip_addr(&self) -> Option<IpAddr> {
        self.ip.or_else(|| self.ip_str.parse().ok())
    }

    /// Returns the `address:port` form of this match
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.ip_str, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_from_matches() {
        let body = r#"{
            "matches": [
                {"ip_str": "1.2.3.4", "port": 80},
                {"ip_str": "1.2.3.4", "port": 443}
            ],
            "total": 2
        }"#;
        let results: SearchResults = serde_json::from_str(body).unwrap();
        assert_eq!(results.endpoints(), vec!["1.2.3.4:80", "1.2.3.4:443"]);
    }

    #[test]
    fn test_optional_fields_default() {
        let body = r#"{"matches": [{"ip_str": "8.8.8.8", "port": 53}]}"#;
        let results: SearchResults = serde_json::from_str(body).unwrap();
        let m = &results.matches[0];
        assert!(m.org.is_none());
        assert!(m.hostnames.is_empty());
        assert_eq!(m.ip_addr(), "8.8.8.8".parse().ok());
    }
}
