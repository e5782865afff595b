//! ============================================================================
//! Tier List View - "Tiers for this post" / "show all" toggle state
//! ============================================================================

use serde::{Deserialize, Serialize};

use crate::types::{ContentItem, Tier};

use super::policy::TierCatalogPolicy;

/// Level ceiling of a tier list; 0 shows the full catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierListView {
    pub level_ceiling: u32,
}

impl TierListView {
    pub fn full() -> Self {
        Self::default()
    }

    pub fn with_ceiling(level_ceiling: u32) -> Self {
        Self { level_ceiling }
    }

    /// Start narrowed to the tiers that unlock `content`
    pub fn for_content(content: &ContentItem) -> Self {
        Self::with_ceiling(content.required_level())
    }

    pub fn is_narrowed(&self) -> bool {
        self.level_ceiling > 0
    }

    pub fn show_all(&mut self) {
        self.level_ceiling = 0;
    }

    pub fn visible(&self, catalog: &[Tier]) -> Vec<Tier> {
        TierCatalogPolicy::visible_tiers(catalog, self.level_ceiling)
    }

    /// Offer the "show all" toggle only when it would reveal something
    pub fn has_hidden_tiers(&self, catalog: &[Tier]) -> bool {
        TierCatalogPolicy::has_hidden_tiers(catalog, self.level_ceiling)
    }
}
