//! ============================================================================
//! TIERGATE-CORE: Tiered access decisions for creator subscriptions
//! ============================================================================
//! Pure decision engine over already-fetched snapshots:
//! - Content gating against the viewer's held tier
//! - Tier card status, call-to-action and style class
//! - Tier list narrowing ("tiers for this post" / "show all") and tap rules
//! - Product adapters for fan passes, memberships and sponsorship plans
//! ============================================================================

pub mod access;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod product;
pub mod status;
pub mod types;

// Re-export main types for convenience
pub use types::*;
pub use access::{AccessDecision, AccessEvaluator};
pub use catalog::{BlockReason, TapAction, TierCatalog, TierCatalogPolicy, TierListView};
pub use config::PresentationConfig;
pub use engine::{TierCard, TierEngine};
pub use error::TierError;
pub use product::{FanPass, Membership, ProductKind, SponsorshipPlan, TierProduct};
pub use status::{
    CallToAction, EnglishLabels, StyleClass, TierLabels, TierPresentation, TierStatus,
    TierStatusResolver,
};
