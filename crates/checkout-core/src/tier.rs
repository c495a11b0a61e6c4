//! Subscription Tiers
//!
//! The tier is read once from the `tier` query parameter and never changes
//! for the lifetime of the page.

use serde::{Deserialize, Serialize};

/// Subscription plan tiers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Basic,
    Pro,
    Power,
}

impl SubscriptionTier {
    pub const ALL: [Self; 3] = [Self::Basic, Self::Pro, Self::Power];

    /// Name used on the wire and in the query string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Power => "power",
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Pro => "Pro",
            Self::Power => "Power",
        }
    }

    /// Parse a tier name, `None` if unrecognized
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "pro" => Some(Self::Pro),
            "power" => Some(Self::Power),
            _ => None,
        }
    }

    /// Resolve the value of a `tier` query parameter, defaulting to Basic
    pub fn from_query_value(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    /// Resolve the tier from a raw query string (with or without the leading `?`)
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let value = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "tier")
            .map(|(_, value)| value.into_owned());
        Self::from_query_value(value.as_deref())
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_value() {
        assert_eq!(SubscriptionTier::from_query_value(Some("pro")), SubscriptionTier::Pro);
        assert_eq!(SubscriptionTier::from_query_value(Some("POWER")), SubscriptionTier::Power);
        assert_eq!(SubscriptionTier::from_query_value(Some("enterprise")), SubscriptionTier::Basic);
        assert_eq!(SubscriptionTier::from_query_value(None), SubscriptionTier::Basic);
    }

    #[test]
    fn test_query_string() {
        assert_eq!(SubscriptionTier::from_query_string("?tier=pro"), SubscriptionTier::Pro);
        assert_eq!(
            SubscriptionTier::from_query_string("ref=mail&tier=power"),
            SubscriptionTier::Power
        );
        assert_eq!(SubscriptionTier::from_query_string("?tier="), SubscriptionTier::Basic);
        assert_eq!(SubscriptionTier::from_query_string(""), SubscriptionTier::Basic);
    }

    #[test]
    fn test_wire_name() {
        let json = serde_json::to_string(&SubscriptionTier::Pro).unwrap();
        assert_eq!(json, "\"pro\"");
        assert_eq!(SubscriptionTier::Power.to_string(), "power");
    }
}
