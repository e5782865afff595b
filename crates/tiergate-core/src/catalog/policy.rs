//! ============================================================================
//! Catalog Policy - Which tiers a list shows and what a tap does
//! ============================================================================
//! A post requiring level N first lists tiers up to N; "show all" resets
//! the ceiling to 0 and the whole catalog is listed.
//! ============================================================================

use crate::types::{held_level, SubscriptionRecord, Tier};

use super::types::{BlockReason, TapAction};

/// Ordering, filtering and tap-through rules for a tier catalog
pub struct TierCatalogPolicy;

impl TierCatalogPolicy {
    /// Tiers at or below `level_ceiling` by ascending level; 0 lists all
    pub fn visible_tiers(catalog: &[Tier], level_ceiling: u32) -> Vec<Tier> {
        let mut visible: Vec<Tier> = catalog
            .iter()
            .filter(|t| level_ceiling == 0 || t.level <= level_ceiling)
            .cloned()
            .collect();
        visible.sort_by_key(|t| t.level);
        visible
    }

    /// Whether narrowing to `level_ceiling` hides any tier
    pub fn has_hidden_tiers(catalog: &[Tier], level_ceiling: u32) -> bool {
        level_ceiling > 0 && catalog.iter().any(|t| t.level > level_ceiling)
    }

    /// Resolve a tap on a tier card
    pub fn tap(tier: &Tier, subscription: Option<&SubscriptionRecord>) -> TapAction {
        if let Some(reason) = Self::block_reason(tier, subscription) {
            return TapAction::Ignore { reason };
        }

        if tier.is_free() {
            TapAction::SubscribeFree {
                tier_id: tier.id.clone(),
            }
        } else {
            TapAction::Purchase {
                tier_id: tier.id.clone(),
                level: tier.level,
                price: tier.price,
            }
        }
    }

    fn block_reason(tier: &Tier, subscription: Option<&SubscriptionRecord>) -> Option<BlockReason> {
        if tier.is_closed() {
            return Some(BlockReason::Closed);
        }
        if tier.is_sold_out() {
            return Some(BlockReason::SoldOut);
        }

        let held = held_level(subscription);
        if held > 0 && tier.level > 0 && tier.level <= held {
            return Some(BlockReason::AlreadyCovered);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TierId;

    fn catalog() -> Vec<Tier> {
        vec![
            Tier::new("gold", 3, "Gold").with_price(5000),
            Tier::new("free", 0, "Follower"),
            Tier::new("bronze", 1, "Bronze").with_price(300),
            Tier::new("silver", 2, "Silver").with_price(1000),
        ]
    }

    fn levels(tiers: &[Tier]) -> Vec<u32> {
        tiers.iter().map(|t| t.level).collect()
    }

    #[test]
    fn test_zero_ceiling_lists_all_sorted() {
        let visible = TierCatalogPolicy::visible_tiers(&catalog(), 0);
        assert_eq!(levels(&visible), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ceiling_narrows_list() {
        let visible = TierCatalogPolicy::visible_tiers(&catalog(), 2);
        assert_eq!(levels(&visible), vec![0, 1, 2]);

        let visible = TierCatalogPolicy::visible_tiers(&catalog(), 10);
        assert_eq!(levels(&visible), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(TierCatalogPolicy::visible_tiers(&[], 2).is_empty());
        assert!(!TierCatalogPolicy::has_hidden_tiers(&[], 2));
    }

    #[test]
    fn test_has_hidden_tiers() {
        assert!(TierCatalogPolicy::has_hidden_tiers(&catalog(), 2));
        assert!(!TierCatalogPolicy::has_hidden_tiers(&catalog(), 3));
        assert!(!TierCatalogPolicy::has_hidden_tiers(&catalog(), 0));
    }

    #[test]
    fn test_tap_closed_tier() {
        let tier = Tier::new("vip", 4, "VIP").with_price(9000).with_limit(0, 0);
        assert_eq!(
            TierCatalogPolicy::tap(&tier, None),
            TapAction::Ignore {
                reason: BlockReason::Closed
            }
        );
    }

    #[test]
    fn test_tap_sold_out_tier() {
        let tier = Tier::new("silver", 2, "Silver").with_limit(10, 12);
        assert_eq!(
            TierCatalogPolicy::tap(&tier, None),
            TapAction::Ignore {
                reason: BlockReason::SoldOut
            }
        );
    }

    #[test]
    fn test_tap_already_covered() {
        let sub = SubscriptionRecord::new(2, "Silver");
        let bronze = Tier::new("bronze", 1, "Bronze").with_price(300);
        let silver = Tier::new("silver", 2, "Silver").with_price(1000);

        for tier in [&bronze, &silver] {
            assert_eq!(
                TierCatalogPolicy::tap(tier, Some(&sub)),
                TapAction::Ignore {
                    reason: BlockReason::AlreadyCovered
                }
            );
        }
    }

    #[test]
    fn test_tap_upgrade_purchases() {
        let sub = SubscriptionRecord::new(1, "Bronze");
        let gold = Tier::new("gold", 3, "Gold").with_price(5000);
        assert_eq!(
            TierCatalogPolicy::tap(&gold, Some(&sub)),
            TapAction::Purchase {
                tier_id: TierId::new("gold"),
                level: 3,
                price: 5000
            }
        );
    }

    #[test]
    fn test_tap_free_tier_subscribes_free() {
        let free = Tier::new("free", 0, "Follower");
        let expected = TapAction::SubscribeFree {
            tier_id: TierId::new("free"),
        };
        assert_eq!(TierCatalogPolicy::tap(&free, None), expected);

        // Holding a paid tier never covers the free one
        let sub = SubscriptionRecord::new(2, "Silver");
        assert_eq!(TierCatalogPolicy::tap(&free, Some(&sub)), expected);
    }

    #[test]
    fn test_tap_base_level_record_does_not_cover() {
        let sub = SubscriptionRecord::new(0, "Follower");
        let bronze = Tier::new("bronze", 1, "Bronze").with_price(300);
        assert!(TierCatalogPolicy::tap(&bronze, Some(&sub)).is_actionable());
    }
}
