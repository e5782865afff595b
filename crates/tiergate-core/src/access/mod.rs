//! ============================================================================
//! Access Module - Tier-gated content access
//! ============================================================================
//! Decides whether a viewer may see a post given the tier it requires and
//! the viewer's subscription record.
//!
//! ## Usage
//! ```rust
//! use tiergate_core::access::{AccessDecision, AccessEvaluator};
//! use tiergate_core::{ContentItem, SubscriptionRecord, TierRef};
//!
//! let post = ContentItem::gated(TierRef::level(2));
//! let sub = SubscriptionRecord::new(2, "Silver");
//! assert_eq!(AccessEvaluator::decide(&post, Some(&sub)), AccessDecision::Unlocked);
//! ```
//! ============================================================================

mod gate;
mod types;

pub use gate::AccessEvaluator;
pub use types::AccessDecision;
