//! ============================================================================
//! Tier Status Resolver - What a tier card shows
//! ============================================================================
//! For each tier in a list the card needs:
//! - a style class (subscribing / dimmed / default)
//! - a status line (expiry, sold out, not available, remaining slots)
//! - a call-to-action label
//!
//! Each is a first-match-wins priority list over the tier and the viewer's
//! subscription record.
//! ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::config::{PresentationConfig, DEFAULT_DATE_FORMAT};
use crate::types::{SubscriptionRecord, Tier};

use super::labels::{format_price, EnglishLabels, TierLabels};

/// Visual affordance for a tier card; the renderer maps it to colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StyleClass {
    #[default]
    Default,
    Dimmed,
    /// The viewer holds exactly this tier
    Subscribing,
}

impl StyleClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            StyleClass::Default => "default",
            StyleClass::Dimmed => "dimmed",
            StyleClass::Subscribing => "subscribing",
        }
    }
}

/// Status line shown under the tier name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum TierStatus {
    /// Held tier with a renewable period
    ExpiresOn(DateTime<Utc>),
    SoldOut,
    /// A higher tier is already held
    NotAvailable,
    Remaining(u32),
    /// Nothing to show
    Empty,
}

/// Action offered on a tier card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "price")]
pub enum CallToAction {
    CurrentlySubscribed,
    SubscribeWithPrice(u64),
    Subscribe,
}

/// Rendered card contents handed to the UI layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPresentation {
    pub status_text: String,
    pub cta_label: String,
    pub style_class: StyleClass,
    /// Display-only count of posts gated at this tier
    pub post_count: u32,
}

/// How the viewer's held tier relates to the tier on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Holding {
    Exact,
    Higher,
    /// Lower tier held, or no subscription at all
    NotCovered,
}

fn holding(tier: &Tier, subscription: Option<&SubscriptionRecord>) -> Holding {
    match subscription {
        Some(sub) if sub.tier_level == tier.level => Holding::Exact,
        Some(sub) if sub.tier_level > tier.level => Holding::Higher,
        _ => Holding::NotCovered,
    }
}

/// Style class, first match wins: exact tier, higher tier, sold out
pub fn style_class(tier: &Tier, subscription: Option<&SubscriptionRecord>) -> StyleClass {
    match holding(tier, subscription) {
        Holding::Exact => StyleClass::Subscribing,
        Holding::Higher => StyleClass::Dimmed,
        Holding::NotCovered if tier.is_sold_out() => StyleClass::Dimmed,
        Holding::NotCovered => StyleClass::Default,
    }
}

/// Status line, first match wins: expiry of the held tier, sold out,
/// higher tier held, remaining slots
pub fn tier_status(tier: &Tier, subscription: Option<&SubscriptionRecord>) -> TierStatus {
    let held = holding(tier, subscription);

    if held == Holding::Exact {
        if let Some(expire_at) = subscription.and_then(|s| s.expire_at) {
            return TierStatus::ExpiresOn(expire_at);
        }
    }

    if tier.is_sold_out() {
        return TierStatus::SoldOut;
    }

    if held == Holding::Higher {
        return TierStatus::NotAvailable;
    }

    match tier.remaining_slots() {
        Some(slots) => TierStatus::Remaining(slots),
        None => TierStatus::Empty,
    }
}

pub fn call_to_action(tier: &Tier, subscription: Option<&SubscriptionRecord>) -> CallToAction {
    if holding(tier, subscription) == Holding::Exact {
        CallToAction::CurrentlySubscribed
    } else if tier.price > 0 {
        CallToAction::SubscribeWithPrice(tier.price)
    } else {
        CallToAction::Subscribe
    }
}

/// Renders tier cards with a label set and formatting config
#[derive(Debug, Clone)]
pub struct TierStatusResolver<L = EnglishLabels> {
    config: PresentationConfig,
    labels: L,
}

impl TierStatusResolver<EnglishLabels> {
    pub fn new(config: PresentationConfig) -> Self {
        Self::with_labels(config, EnglishLabels::new())
    }
}

impl Default for TierStatusResolver<EnglishLabels> {
    fn default() -> Self {
        Self::new(PresentationConfig::default())
    }
}

impl<L: TierLabels> TierStatusResolver<L> {
    pub fn with_labels(config: PresentationConfig, labels: L) -> Self {
        Self { config, labels }
    }

    pub fn resolve(
        &self,
        tier: &Tier,
        subscription: Option<&SubscriptionRecord>,
        post_count: u32,
    ) -> TierPresentation {
        TierPresentation {
            status_text: self.status_text(&tier_status(tier, subscription)),
            cta_label: self.cta_label(&call_to_action(tier, subscription)),
            style_class: style_class(tier, subscription),
            post_count,
        }
    }

    pub fn status_text(&self, status: &TierStatus) -> String {
        match status {
            TierStatus::ExpiresOn(date) => self.labels.expires_on(&self.format_date(date)),
            TierStatus::SoldOut => self.labels.sold_out(),
            TierStatus::NotAvailable => self.labels.not_available(),
            TierStatus::Remaining(slots) => self.labels.remaining(*slots),
            TierStatus::Empty => String::new(),
        }
    }

    pub fn cta_label(&self, cta: &CallToAction) -> String {
        match cta {
            CallToAction::CurrentlySubscribed => self.labels.currently_subscribed(),
            CallToAction::SubscribeWithPrice(price) => self
                .labels
                .subscribe_with_price(&format_price(*price, self.config.thousands_separator)),
            CallToAction::Subscribe => self.labels.subscribe(),
        }
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    /// Falls back to the default pattern if the configured one is invalid
    fn format_date(&self, date: &DateTime<Utc>) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.config.date_format)).is_err() {
            out = date.format(DEFAULT_DATE_FORMAT).to_string();
        }
        out
    }
}
