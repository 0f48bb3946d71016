//! Classification of user-supplied target strings.

use regex::Regex;
use std::net::IpAddr;
use std::sync::OnceLock;

/// Dotted-quad IPv4 address followed by a decimal prefix length.
const RANGE_PATTERN: &str = r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}/\d+\b";

fn range_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(RANGE_PATTERN).expect("valid range pattern"))
}

/// What kind of target the user supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Already a network-range expression; no resolution needed
    Range,
    /// A literal IPv4 or IPv6 address
    Address,
    /// Anything else is treated as a domain name
    Domain,
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range => write!(f, "range"),
            Self::Address => write!(f, "address"),
            Self::Domain => write!(f, "domain"),
        }
    }
}

/// Returns the first network-range substring in `s`, if any
#[must_use]
pub fn extract_range(s: &str) -> Option<&str> {
    range_regex().find(s).map(|m| m.as_str())
}

/// Returns true iff `s` contains a network-range expression
#[must_use]
pub fn is_network_range(s: &str) -> bool {
    range_regex().is_match(s)
}

/// Returns true iff `s` parses as an IPv4 or IPv6 address
#[must_use]
pub fn is_address(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// Classify a target string
#[must_use]
pub fn classify(s: &str) -> TargetKind {
    if is_network_range(s) {
        TargetKind::Range
    } else if is_address(s) {
        TargetKind::Address
    } else {
        TargetKind::Domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_classification() {
        assert_eq!(classify("192.0.2.0/24"), TargetKind::Range);
        assert_eq!(classify("10.0.0.0/8"), TargetKind::Range);
        // The pattern matches anywhere in the string.
        assert_eq!(classify("range is 192.0.2.0/24 here"), TargetKind::Range);
    }

    #[test]
    fn test_address_classification() {
        assert!(is_address("192.0.2.1"));
        assert!(is_address("::1"));
        assert!(!is_address("example.com"));
        assert!(!is_address("192.0.2.1/24"));

        assert_eq!(classify("192.0.2.1"), TargetKind::Address);
        assert_eq!(classify("2001:db8::1"), TargetKind::Address);
    }

    #[test]
    fn test_domain_classification() {
        assert_eq!(classify("example.com"), TargetKind::Domain);
        assert_eq!(classify("sub.example.co.uk"), TargetKind::Domain);
    }

    #[test]
    fn test_extract_range_from_lookup_output() {
        assert_eq!(extract_range("198.51.100.0/24\n"), Some("198.51.100.0/24"));
        assert_eq!(
            extract_range("AS64496 example 203.0.113.0/24 announced"),
            Some("203.0.113.0/24")
        );
        assert_eq!(extract_range("no ranges here"), None);
    }
}
