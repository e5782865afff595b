//! ============================================================================
//! Core Types - Tiers, subscriptions and gated content
//! ============================================================================
//! Read-only snapshots supplied by the data layer. Field names follow the
//! platform's JSON (camelCase). Nothing in this crate mutates them.
//! ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque tier identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierId(pub String);

impl TierId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TierId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TierId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One purchasable access level offered by a creator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub id: TierId,
    /// 0 is the free/base tier, higher is more exclusive
    pub level: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Platform token count, only meaningful above level 0
    #[serde(default)]
    pub price: u64,
    /// `None` = unlimited, `Some(0)` = closed to new subscribers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<u32>,
}

impl Tier {
    /// Create an unlimited, free-priced tier
    pub fn new(id: impl Into<TierId>, level: u32, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            level,
            name: name.into(),
            description: None,
            price: 0,
            subscriber_limit: None,
            subscriber_count: None,
        }
    }

    pub fn with_price(mut self, price: u64) -> Self {
        self.price = price;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Cap the tier at `limit` subscribers, `count` of which are taken
    pub fn with_limit(mut self, limit: u32, count: u32) -> Self {
        self.subscriber_limit = Some(limit);
        self.subscriber_count = Some(count);
        self
    }

    pub fn is_free(&self) -> bool {
        self.level == 0
    }

    /// Missing count reads as nobody subscribed yet
    pub fn subscriber_count_or_zero(&self) -> u32 {
        self.subscriber_count.unwrap_or(0)
    }

    /// A zero limit permanently closes the tier
    pub fn is_closed(&self) -> bool {
        self.subscriber_limit == Some(0)
    }

    /// Closed, or every slot of a limited tier is taken.
    ///
    /// Counts above the limit come from upstream bugs; they still read as
    /// sold out.
    pub fn is_sold_out(&self) -> bool {
        match self.subscriber_limit {
            Some(0) => true,
            Some(limit) => self.subscriber_count_or_zero() >= limit,
            None => false,
        }
    }

    /// Free slots left on a limited, open tier
    pub fn remaining_slots(&self) -> Option<u32> {
        self.subscriber_limit
            .filter(|limit| *limit > 0)
            .map(|limit| limit.saturating_sub(self.subscriber_count_or_zero()))
    }

    pub fn to_ref(&self) -> TierRef {
        TierRef {
            id: Some(self.id.clone()),
            level: self.level,
        }
    }
}

/// Reference from a post to the tier it requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TierId>,
    pub level: u32,
}

impl TierRef {
    pub fn level(level: u32) -> Self {
        Self { id: None, level }
    }
}

/// The viewer's currently held tier for one creator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    pub tier_level: u32,
    #[serde(default)]
    pub tier_name: String,
    /// Present when the held tier is a renewable paid period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
}

impl SubscriptionRecord {
    pub fn new(tier_level: u32, tier_name: impl Into<String>) -> Self {
        Self {
            tier_level,
            tier_name: tier_name.into(),
            expire_at: None,
        }
    }

    pub fn with_expiry(mut self, expire_at: DateTime<Utc>) -> Self {
        self.expire_at = Some(expire_at);
        self
    }
}

/// Level the viewer holds; no subscription holds the base level
pub fn held_level(subscription: Option<&SubscriptionRecord>) -> u32 {
    subscription.map_or(0, |s| s.tier_level)
}

/// A gated resource (a post)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// `None` = open to everyone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_tier: Option<TierRef>,
    /// The viewer is the content's creator
    #[serde(default)]
    pub is_owner_context: bool,
}

impl ContentItem {
    pub fn open() -> Self {
        Self::default()
    }

    pub fn gated(required_tier: TierRef) -> Self {
        Self {
            required_tier: Some(required_tier),
            is_owner_context: false,
        }
    }

    pub fn owned(mut self) -> Self {
        self.is_owner_context = true;
        self
    }

    /// Level required to view, 0 when the content is open
    pub fn required_level(&self) -> u32 {
        self.required_tier.as_ref().map_or(0, |t| t.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_tier_never_sold_out() {
        let tier = Tier::new("t1", 1, "Bronze");
        assert!(!tier.is_sold_out());
        assert_eq!(tier.remaining_slots(), None);
    }

    #[test]
    fn test_zero_limit_is_closed() {
        let tier = Tier::new("t1", 1, "Bronze").with_limit(0, 0);
        assert!(tier.is_closed());
        assert!(tier.is_sold_out());
        assert_eq!(tier.remaining_slots(), None);
    }

    #[test]
    fn test_sold_out_at_limit() {
        let tier = Tier::new("t2", 2, "Silver").with_limit(10, 10);
        assert!(tier.is_sold_out());
        assert_eq!(tier.remaining_slots(), Some(0));
    }

    #[test]
    fn test_count_over_limit_does_not_panic() {
        let tier = Tier::new("t2", 2, "Silver").with_limit(3, 7);
        assert!(tier.is_sold_out());
        assert_eq!(tier.remaining_slots(), Some(0));
    }

    #[test]
    fn test_missing_count_reads_as_zero() {
        let mut tier = Tier::new("t3", 3, "Gold");
        tier.subscriber_limit = Some(5);
        assert!(!tier.is_sold_out());
        assert_eq!(tier.remaining_slots(), Some(5));
    }

    #[test]
    fn test_held_level() {
        assert_eq!(held_level(None), 0);
        let sub = SubscriptionRecord::new(2, "Silver");
        assert_eq!(held_level(Some(&sub)), 2);
    }

    #[test]
    fn test_tier_from_platform_json() {
        let tier: Tier = serde_json::from_str(
            r#"{"id":"fp-3","level":3,"name":"Gold","price":5000,"subscriberLimit":20,"subscriberCount":5}"#,
        )
        .unwrap();
        assert_eq!(tier.id, TierId::new("fp-3"));
        assert_eq!(tier.price, 5000);
        assert_eq!(tier.subscriber_limit, Some(20));
        assert_eq!(tier.description, None);
    }

    #[test]
    fn test_content_defaults() {
        let content: ContentItem = serde_json::from_str("{}").unwrap();
        assert_eq!(content, ContentItem::open());
        assert_eq!(content.required_level(), 0);

        let content: ContentItem =
            serde_json::from_str(r#"{"requiredTier":{"level":2},"isOwnerContext":true}"#).unwrap();
        assert_eq!(content.required_level(), 2);
        assert!(content.is_owner_context);
    }
}
