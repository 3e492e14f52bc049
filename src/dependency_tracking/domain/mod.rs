pub mod asset_path;
pub mod dependency_index;
pub mod involved_asset;

pub use asset_path::{AssetPath, DEFAULT_RESOURCES_MARKER};
pub use dependency_index::DependencyIndex;
pub use involved_asset::InvolvedAsset;
