//! Data types consumed by the expander.

mod asset_store;
mod dataset;

pub use asset_store::AssetStore;
pub use dataset::Dataset;
