//! ============================================================================
//! Status Module - Tier card presentation
//! ============================================================================
//! Resolves the status line, call-to-action label and style class for each
//! tier card. Decisions are abstract (`TierStatus`, `CallToAction`,
//! `StyleClass`); `TierLabels` turns them into text.
//! ============================================================================

mod labels;
mod resolver;

pub use labels::{format_price, EnglishLabels, TierLabels};
pub use resolver::{
    call_to_action, style_class, tier_status, CallToAction, StyleClass, TierPresentation,
    TierStatus, TierStatusResolver,
};
