//! ============================================================================
//! Errors - Failures of the fallible helpers around the engine
//! ============================================================================
//! The decision functions themselves are total. These errors come from
//! catalog validation, lookups and the `require` gate.
//! ============================================================================

use crate::types::TierId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TierError {
    #[error("Content locked: requires level {required}, viewer holds level {held}")]
    Locked { required: u32, held: u32 },

    #[error("Duplicate tier level {level} in catalog")]
    DuplicateLevel { level: u32 },

    #[error("Duplicate tier id in catalog: {0}")]
    DuplicateId(TierId),

    #[error("Tier not found: {0}")]
    UnknownTier(TierId),
}

pub type Result<T, E = TierError> = std::result::Result<T, E>;
