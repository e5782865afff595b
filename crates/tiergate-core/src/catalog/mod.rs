//! ============================================================================
//! Catalog Module - Tier list ordering, narrowing and tap-through
//! ============================================================================

mod policy;
mod types;
mod view;

pub use policy::TierCatalogPolicy;
pub use types::{BlockReason, TapAction, TierCatalog};
pub use view::TierListView;
