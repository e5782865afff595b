//! ============================================================================
//! Presentation Config - Formatting knobs for tier cards
//! ============================================================================

use serde::{Deserialize, Serialize};

/// Default `strftime` pattern for expiry dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formatting configuration (can be customized per locale)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresentationConfig {
    /// `strftime` pattern used for "expires on" messages
    pub date_format: String,
    /// Digit group separator for prices (1,000 vs 1.000)
    pub thousands_separator: char,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            thousands_separator: ',',
        }
    }
}
