// ============================================================================
// CLI configuration - presentation settings from file and environment
// ============================================================================
// Precedence: TIERGATE_* env vars (also read from .env) > --config file >
// built-in defaults.
// ============================================================================

use anyhow::{bail, Context, Result};
use std::path::Path;
use tiergate_core::PresentationConfig;

pub const ENV_DATE_FORMAT: &str = "TIERGATE_DATE_FORMAT";
pub const ENV_THOUSANDS_SEPARATOR: &str = "TIERGATE_THOUSANDS_SEPARATOR";

/// Load presentation config from an optional JSON file plus the environment
pub fn load(path: Option<&Path>) -> Result<PresentationConfig> {
    let config = match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read config {}", p.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid config {}", p.display()))?
        }
        None => PresentationConfig::default(),
    };

    apply_env(config, |key| std::env::var(key).ok())
}

fn apply_env(
    mut config: PresentationConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PresentationConfig> {
    if let Some(format) = lookup(ENV_DATE_FORMAT) {
        config.date_format = format;
    }

    if let Some(sep) = lookup(ENV_THOUSANDS_SEPARATOR) {
        let mut chars = sep.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => config.thousands_separator = c,
            _ => bail!(
                "{} must be a single character, got '{}'",
                ENV_THOUSANDS_SEPARATOR,
                sep
            ),
        }
    }

    Ok(config)
}
