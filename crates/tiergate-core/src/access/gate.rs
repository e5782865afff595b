//! ============================================================================
//! Access Gate - Content gating against the viewer's held tier
//! ============================================================================
//! Rules, first match wins:
//! 1. The viewer owns the content
//! 2. The content requires no tier
//! 3. No subscription and a paid level is required -> locked
//! 4. Held level >= required level
//! 5. Otherwise locked
//! ============================================================================

use crate::error::{Result, TierError};
use crate::types::{held_level, ContentItem, SubscriptionRecord};

use super::types::AccessDecision;

/// Decides whether a viewer may see gated content
pub struct AccessEvaluator;

impl AccessEvaluator {
    pub fn decide(
        content: &ContentItem,
        subscription: Option<&SubscriptionRecord>,
    ) -> AccessDecision {
        if content.is_owner_context {
            return AccessDecision::Unlocked;
        }

        let Some(required) = &content.required_tier else {
            return AccessDecision::Unlocked;
        };

        match subscription {
            None if required.level > 0 => AccessDecision::Locked,
            // A missing subscription holds the base level
            _ => AccessDecision::from(held_level(subscription) >= required.level),
        }
    }

    /// Gate content, returning Err with the levels involved if locked
    pub fn require(
        content: &ContentItem,
        subscription: Option<&SubscriptionRecord>,
    ) -> Result<()> {
        match Self::decide(content, subscription) {
            AccessDecision::Unlocked => Ok(()),
            AccessDecision::Locked => Err(TierError::Locked {
                required: content.required_level(),
                held: held_level(subscription),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TierRef;

    fn sub(level: u32) -> SubscriptionRecord {
        SubscriptionRecord::new(level, format!("Level {}", level))
    }

    #[test]
    fn test_owner_always_unlocked() {
        let content = ContentItem::gated(TierRef::level(5)).owned();
        assert_eq!(AccessEvaluator::decide(&content, None), AccessDecision::Unlocked);
        assert_eq!(
            AccessEvaluator::decide(&content, Some(&sub(1))),
            AccessDecision::Unlocked
        );
    }

    #[test]
    fn test_open_content_unlocked() {
        let content = ContentItem::open();
        assert_eq!(AccessEvaluator::decide(&content, None), AccessDecision::Unlocked);
        assert_eq!(
            AccessEvaluator::decide(&content, Some(&sub(0))),
            AccessDecision::Unlocked
        );
    }

    #[test]
    fn test_no_subscription_locks_paid_content() {
        let content = ContentItem::gated(TierRef::level(1));
        assert_eq!(AccessEvaluator::decide(&content, None), AccessDecision::Locked);
    }

    #[test]
    fn test_no_subscription_base_level_unlocked() {
        let content = ContentItem::gated(TierRef::level(0));
        assert_eq!(AccessEvaluator::decide(&content, None), AccessDecision::Unlocked);
    }

    #[test]
    fn test_held_level_comparison() {
        let content = ContentItem::gated(TierRef::level(2));
        assert_eq!(
            AccessEvaluator::decide(&content, Some(&sub(1))),
            AccessDecision::Locked
        );
        assert_eq!(
            AccessEvaluator::decide(&content, Some(&sub(2))),
            AccessDecision::Unlocked
        );
        assert_eq!(
            AccessEvaluator::decide(&content, Some(&sub(3))),
            AccessDecision::Unlocked
        );
    }

    #[test]
    fn test_require_reports_levels() {
        let content = ContentItem::gated(TierRef::level(3));
        let err = AccessEvaluator::require(&content, Some(&sub(1))).unwrap_err();
        assert_eq!(err, TierError::Locked { required: 3, held: 1 });

        let err = AccessEvaluator::require(&content, None).unwrap_err();
        assert_eq!(err, TierError::Locked { required: 3, held: 0 });

        assert!(AccessEvaluator::require(&content, Some(&sub(3))).is_ok());
    }
}
