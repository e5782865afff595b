//! ============================================================================
//! Product Adapters - FanPass, Membership and SponsorshipPlan
//! ============================================================================
//! The platform sells the same tier concept under three names. Each product
//! is a thin wrapper over `Tier` so every product runs through one engine.
//! ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::Tier;

/// Product family a tier catalog belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    #[default]
    FanPass,
    Membership,
    SponsorshipPlan,
}

impl ProductKind {
    pub const ALL: [ProductKind; 3] = [
        ProductKind::FanPass,
        ProductKind::Membership,
        ProductKind::SponsorshipPlan,
    ];

    /// Get human-readable product name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductKind::FanPass => "Fan Pass",
            ProductKind::Membership => "Membership",
            ProductKind::SponsorshipPlan => "Sponsorship Plan",
        }
    }

    /// Verb on the call-to-action button
    pub fn subscribe_verb(&self) -> &'static str {
        match self {
            ProductKind::FanPass => "Subscribe",
            ProductKind::Membership => "Join",
            ProductKind::SponsorshipPlan => "Sponsor",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProductKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "fan-pass" | "fanpass" => Ok(ProductKind::FanPass),
            "membership" => Ok(ProductKind::Membership),
            "sponsorship-plan" | "sponsorshipplan" | "sponsorship" => {
                Ok(ProductKind::SponsorshipPlan)
            }
            _ => Err(format!(
                "Unknown product '{}'. Valid values: fan-pass, membership, sponsorship-plan",
                s
            )),
        }
    }
}

/// A product-specific tier that the generic engine can evaluate
pub trait TierProduct {
    const KIND: ProductKind;

    fn tier(&self) -> &Tier;

    fn into_tier(self) -> Tier;
}

macro_rules! product_tier {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Tier);

        impl TierProduct for $name {
            const KIND: ProductKind = $kind;

            fn tier(&self) -> &Tier {
                &self.0
            }

            fn into_tier(self) -> Tier {
                self.0
            }
        }

        impl From<Tier> for $name {
            fn from(tier: Tier) -> Self {
                Self(tier)
            }
        }
    };
}

product_tier!(
    /// A creator's fan pass level
    FanPass => ProductKind::FanPass
);
product_tier!(
    /// A project membership level
    Membership => ProductKind::Membership
);
product_tier!(
    /// A sponsorship plan level
    SponsorshipPlan => ProductKind::SponsorshipPlan
);

/// Unwrap a product catalog into generic tiers
pub fn into_tiers<P: TierProduct>(products: Vec<P>) -> Vec<Tier> {
    products.into_iter().map(TierProduct::into_tier).collect()
}
