// ============================================================================
// Screen snapshot - the catalog, subscription and posts one screen loaded
// ============================================================================

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tiergate_core::{ContentItem, SubscriptionRecord, TierCatalog};

/// A post as listed on a creator's page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(flatten)]
    pub content: ContentItem,
}

/// Everything a screen fetched before rendering
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub catalog: TierCatalog,
    #[serde(default)]
    pub subscription: Option<SubscriptionRecord>,
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Posts per tier level; counted from `posts` when absent
    #[serde(default)]
    pub post_counts: Option<BTreeMap<u32, u32>>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid snapshot {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn post(&self, id: &str) -> Result<&Post> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| anyhow!("Post not found: {}", id))
    }

    pub fn post_counts(&self) -> BTreeMap<u32, u32> {
        if let Some(counts) = &self.post_counts {
            return counts.clone();
        }

        let mut counts = BTreeMap::new();
        for post in &self.posts {
            if let Some(required) = &post.content.required_tier {
                *counts.entry(required.level).or_insert(0) += 1;
            }
        }
        counts
    }
}
