//! ============================================================================
//! Tier Labels - Strings shown on tier cards
//! ============================================================================
//! The resolver only decides *which* message applies. Wording lives behind
//! `TierLabels` so the host app can plug in its own localization lookup.
//! ============================================================================

use crate::product::ProductKind;

/// Source of user-visible wording for tier cards
pub trait TierLabels {
    /// `date` is already formatted with the configured pattern
    fn expires_on(&self, date: &str) -> String;
    fn sold_out(&self) -> String;
    /// A higher tier is already held
    fn not_available(&self) -> String;
    fn remaining(&self, slots: u32) -> String;
    fn currently_subscribed(&self) -> String;
    fn subscribe(&self) -> String;
    /// `price` is already grouped with thousands separators
    fn subscribe_with_price(&self, price: &str) -> String;
}

/// Built-in English wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnglishLabels {
    subscribe_verb: &'static str,
}

impl EnglishLabels {
    pub fn new() -> Self {
        Self {
            subscribe_verb: "Subscribe",
        }
    }

    /// Wording using the product's own verb ("Join", "Sponsor", ...)
    pub fn for_product(kind: ProductKind) -> Self {
        Self {
            subscribe_verb: kind.subscribe_verb(),
        }
    }
}

impl Default for EnglishLabels {
    fn default() -> Self {
        Self::new()
    }
}

impl TierLabels for EnglishLabels {
    fn expires_on(&self, date: &str) -> String {
        format!("Expires on {}", date)
    }

    fn sold_out(&self) -> String {
        "Sold out".into()
    }

    fn not_available(&self) -> String {
        "Not available".into()
    }

    fn remaining(&self, slots: u32) -> String {
        format!("{} remaining", slots)
    }

    fn currently_subscribed(&self) -> String {
        "Currently subscribed".into()
    }

    fn subscribe(&self) -> String {
        self.subscribe_verb.to_string()
    }

    fn subscribe_with_price(&self, price: &str) -> String {
        format!("{} {}", price, self.subscribe_verb)
    }
}

/// Group digits in threes: 1234567 -> "1,234,567"
pub fn format_price(price: u64, separator: char) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}
