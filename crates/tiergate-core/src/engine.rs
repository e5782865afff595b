//! ============================================================================
//! Tier Engine - One entry point for gating, tier cards and tap-through
//! ============================================================================
//! Wires the access evaluator, status resolver and catalog policy together
//! behind a single configured value:
//! - Content gating (locked / unlocked)
//! - Tier card presentation (status, call-to-action, style class)
//! - Tier list narrowing and tap handling
//!
//! The engine keeps no state between calls. Every call is a fresh, idempotent
//! evaluation of the snapshots it is given.
//! ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::access::{AccessDecision, AccessEvaluator};
use crate::catalog::{TapAction, TierCatalogPolicy, TierListView};
use crate::config::PresentationConfig;
use crate::error::Result;
use crate::product::ProductKind;
use crate::status::{EnglishLabels, TierLabels, TierPresentation, TierStatusResolver};
use crate::types::{held_level, ContentItem, SubscriptionRecord, Tier};

/// A tier together with what its card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCard {
    pub tier: Tier,
    #[serde(flatten)]
    pub presentation: TierPresentation,
}

/// Tier engine for one screen's worth of decisions
#[derive(Debug, Clone)]
pub struct TierEngine<L = EnglishLabels> {
    resolver: TierStatusResolver<L>,
}

impl TierEngine<EnglishLabels> {
    /// Create new engine with default config and English labels
    pub fn new() -> Self {
        Self::with_config(PresentationConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: PresentationConfig) -> Self {
        Self::with_labels(config, EnglishLabels::new())
    }

    /// English labels using the product's own wording
    pub fn for_product(kind: ProductKind, config: PresentationConfig) -> Self {
        Self::with_labels(config, EnglishLabels::for_product(kind))
    }
}

impl Default for TierEngine<EnglishLabels> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: TierLabels> TierEngine<L> {
    /// Create with a host-supplied label set
    pub fn with_labels(config: PresentationConfig, labels: L) -> Self {
        Self {
            resolver: TierStatusResolver::with_labels(config, labels),
        }
    }

    pub fn config(&self) -> &PresentationConfig {
        self.resolver.config()
    }

    /// Decide whether the viewer may see `content`
    pub fn decide(
        &self,
        content: &ContentItem,
        subscription: Option<&SubscriptionRecord>,
    ) -> AccessDecision {
        let decision = AccessEvaluator::decide(content, subscription);
        debug!(
            "Access {} (required level {}, held level {}, owner {})",
            decision,
            content.required_level(),
            held_level(subscription),
            content.is_owner_context
        );
        decision
    }

    /// Gate content - returns Ok(()) if unlocked, Err with the levels if not
    pub fn require(
        &self,
        content: &ContentItem,
        subscription: Option<&SubscriptionRecord>,
    ) -> Result<()> {
        AccessEvaluator::require(content, subscription).map_err(|e| {
            warn!("Access denied: {}", e);
            e
        })
    }

    /// Resolve one tier card
    pub fn present(
        &self,
        tier: &Tier,
        subscription: Option<&SubscriptionRecord>,
        post_count: u32,
    ) -> TierPresentation {
        self.resolver.resolve(tier, subscription, post_count)
    }

    /// Resolve every card in a (possibly narrowed) tier list.
    ///
    /// `post_counts` maps tier level to the number of posts gated at it;
    /// missing levels show zero posts.
    pub fn present_catalog(
        &self,
        catalog: &[Tier],
        subscription: Option<&SubscriptionRecord>,
        view: &TierListView,
        post_counts: &BTreeMap<u32, u32>,
    ) -> Vec<TierCard> {
        let cards: Vec<TierCard> = view
            .visible(catalog)
            .into_iter()
            .map(|tier| {
                let post_count = post_counts.get(&tier.level).copied().unwrap_or(0);
                let presentation = self.present(&tier, subscription, post_count);
                TierCard { tier, presentation }
            })
            .collect();

        debug!(
            "Presented {} of {} tiers (ceiling {})",
            cards.len(),
            catalog.len(),
            view.level_ceiling
        );
        cards
    }

    pub fn visible_tiers(&self, catalog: &[Tier], level_ceiling: u32) -> Vec<Tier> {
        TierCatalogPolicy::visible_tiers(catalog, level_ceiling)
    }

    /// Resolve a tap on a tier card
    pub fn tap(&self, tier: &Tier, subscription: Option<&SubscriptionRecord>) -> TapAction {
        let action = TierCatalogPolicy::tap(tier, subscription);
        debug!("Tap on tier {} (level {}): {:?}", tier.id, tier.level, action);
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BlockReason;
    use crate::error::TierError;
    use crate::status::StyleClass;
    use crate::types::TierRef;

    fn catalog() -> Vec<Tier> {
        vec![
            Tier::new("free", 0, "Follower"),
            Tier::new("bronze", 1, "Bronze").with_price(300),
            Tier::new("silver", 2, "Silver").with_price(1000).with_limit(10, 10),
            Tier::new("gold", 3, "Gold").with_price(5000).with_limit(20, 5),
        ]
    }

    #[test]
    fn test_engine_decide() {
        let engine = TierEngine::new();
        let post = ContentItem::gated(TierRef::level(2));

        assert_eq!(
            engine.decide(&post, Some(&SubscriptionRecord::new(1, "Bronze"))),
            AccessDecision::Locked
        );
        assert_eq!(
            engine.decide(&post, Some(&SubscriptionRecord::new(2, "Silver"))),
            AccessDecision::Unlocked
        );
    }

    #[test]
    fn test_engine_require() {
        let engine = TierEngine::new();
        let post = ContentItem::gated(TierRef::level(3));
        assert_eq!(
            engine.require(&post, None),
            Err(TierError::Locked { required: 3, held: 0 })
        );
        assert!(engine.require(&post.clone().owned(), None).is_ok());
    }

    #[test]
    fn test_present_catalog_narrowed() {
        let engine = TierEngine::new();
        let view = TierListView::with_ceiling(2);
        let counts = BTreeMap::from([(1, 4), (2, 7)]);

        let cards = engine.present_catalog(&catalog(), None, &view, &counts);
        let names: Vec<&str> = cards.iter().map(|c| c.tier.name.as_str()).collect();
        assert_eq!(names, vec!["Follower", "Bronze", "Silver"]);

        assert_eq!(cards[0].presentation.post_count, 0);
        assert_eq!(cards[1].presentation.post_count, 4);
        assert_eq!(cards[1].presentation.cta_label, "300 Subscribe");
        assert_eq!(cards[2].presentation.style_class, StyleClass::Dimmed);
        assert_eq!(cards[2].presentation.status_text, "Sold out");
    }

    #[test]
    fn test_present_catalog_full_with_subscription() {
        let engine = TierEngine::new();
        let sub = SubscriptionRecord::new(1, "Bronze");
        let cards = engine.present_catalog(&catalog(), Some(&sub), &TierListView::full(), &BTreeMap::new());

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].presentation.style_class, StyleClass::Dimmed);
        assert_eq!(cards[1].presentation.style_class, StyleClass::Subscribing);
        assert_eq!(cards[1].presentation.cta_label, "Currently subscribed");
        assert_eq!(cards[3].presentation.status_text, "15 remaining");
    }

    #[test]
    fn test_product_wording() {
        let engine = TierEngine::for_product(ProductKind::SponsorshipPlan, PresentationConfig::default());
        let tier = Tier::new("plan", 1, "Backer").with_price(2000);
        assert_eq!(engine.present(&tier, None, 0).cta_label, "2,000 Sponsor");
    }

    #[test]
    fn test_engine_tap() {
        let engine = TierEngine::new();
        let tiers = catalog();
        assert_eq!(
            engine.tap(&tiers[2], None),
            TapAction::Ignore {
                reason: BlockReason::SoldOut
            }
        );
        assert!(engine.tap(&tiers[3], None).is_actionable());
    }

    #[test]
    fn test_card_serializes_flat() {
        let engine = TierEngine::new();
        let cards = engine.present_catalog(&catalog()[..1], None, &TierListView::full(), &BTreeMap::new());
        let json = serde_json::to_value(&cards[0]).unwrap();
        assert_eq!(json["ctaLabel"], "Subscribe");
        assert_eq!(json["styleClass"], "default");
        assert_eq!(json["tier"]["id"], "free");
    }
}
