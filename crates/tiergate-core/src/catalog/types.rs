//! ============================================================================
//! Catalog Types - Validated tier catalogs and tap outcomes
//! ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, TierError};
use crate::types::{Tier, TierId};

/// Why tapping a tier card does nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// Subscriber limit is zero
    Closed,
    /// Every slot is taken
    SoldOut,
    /// A paid tier at this level or above is already held
    AlreadyCovered,
}

impl BlockReason {
    pub fn display_name(&self) -> &'static str {
        match self {
            BlockReason::Closed => "Closed",
            BlockReason::SoldOut => "Sold out",
            BlockReason::AlreadyCovered => "Already covered by held tier",
        }
    }
}

/// Result of tapping a tier card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum TapAction {
    /// Tap is a no-op
    Ignore { reason: BlockReason },
    /// Route to the free subscribe action
    SubscribeFree { tier_id: TierId },
    /// Route to the paid purchase flow
    Purchase { tier_id: TierId, level: u32, price: u64 },
}

impl TapAction {
    pub fn is_actionable(&self) -> bool {
        !matches!(self, TapAction::Ignore { .. })
    }
}

/// A catalog with unique levels and ids, ordered by ascending level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct TierCatalog {
    tiers: Vec<Tier>,
}

impl TierCatalog {
    pub fn new(mut tiers: Vec<Tier>) -> Result<Self> {
        tiers.sort_by_key(|t| t.level);

        if let Some(pair) = tiers.windows(2).find(|w| w[0].level == w[1].level) {
            return Err(TierError::DuplicateLevel {
                level: pair[0].level,
            });
        }

        {
            let mut seen = HashSet::with_capacity(tiers.len());
            for tier in &tiers {
                if !seen.insert(&tier.id) {
                    return Err(TierError::DuplicateId(tier.id.clone()));
                }
            }
        }

        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn find(&self, id: &TierId) -> Result<&Tier> {
        self.tiers
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| TierError::UnknownTier(id.clone()))
    }

    pub fn at_level(&self, level: u32) -> Option<&Tier> {
        self.tiers
            .binary_search_by_key(&level, |t| t.level)
            .ok()
            .map(|idx| &self.tiers[idx])
    }

    /// Most exclusive level on offer
    pub fn max_level(&self) -> Option<u32> {
        self.tiers.last().map(|t| t.level)
    }
}

impl TryFrom<Vec<Tier>> for TierCatalog {
    type Error = TierError;

    fn try_from(tiers: Vec<Tier>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<TierCatalog> for Vec<Tier> {
    fn from(catalog: TierCatalog) -> Self {
        catalog.tiers
    }
}
