//! ============================================================================
//! Access Types - Outcome of a content gating decision
//! ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the viewer may see a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    Unlocked,
    Locked,
}

impl AccessDecision {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, AccessDecision::Unlocked)
    }

    pub fn is_locked(&self) -> bool {
        !self.is_unlocked()
    }

    /// Get human-readable decision name
    pub fn display_name(&self) -> &'static str {
        match self {
            AccessDecision::Unlocked => "Unlocked",
            AccessDecision::Locked => "Locked",
        }
    }
}

impl From<bool> for AccessDecision {
    fn from(allowed: bool) -> Self {
        if allowed {
            AccessDecision::Unlocked
        } else {
            AccessDecision::Locked
        }
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
