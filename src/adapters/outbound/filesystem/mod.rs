/// Filesystem adapters: the manifest-backed asset database and report output
mod file_writer;
mod manifest_asset_database;
mod manifest_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use manifest_asset_database::ManifestAssetDatabase;
pub use manifest_reader::{AssetManifest, ManifestEntry, ManifestReader};
