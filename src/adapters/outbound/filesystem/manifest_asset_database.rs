use super::manifest_reader::{AssetManifest, ManifestReader};
use crate::dependency_tracking::domain::AssetPath;
use crate::ports::outbound::AssetDatabase;
use crate::shared::error::UsageError;
use crate::shared::security::{resolve_within_root, validate_not_symlink};
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// ManifestAssetDatabase adapter: a host asset database backed by a manifest
///
/// Asset listing and forward dependencies come from a dependency manifest;
/// asset files live under `project_root`, where deletions happen. In dry-run
/// mode deletions only update the in-memory listing.
pub struct ManifestAssetDatabase {
    project_root: PathBuf,
    assets: RefCell<Vec<AssetPath>>,
    dependencies: HashMap<AssetPath, Vec<AssetPath>>,
    dry_run: bool,
}

impl ManifestAssetDatabase {
    /// Creates the database from a parsed manifest
    ///
    /// A path listed more than once keeps its first entry.
    ///
    /// # Errors
    /// Returns an error if an asset or dependency path is empty
    pub fn new(manifest: AssetManifest, project_root: PathBuf) -> Result<Self> {
        let mut assets = Vec::with_capacity(manifest.assets.len());
        let mut dependencies: HashMap<AssetPath, Vec<AssetPath>> = HashMap::new();

        for entry in manifest.assets {
            let asset = AssetPath::new(entry.path)?;
            let forward = entry
                .dependencies
                .into_iter()
                .map(AssetPath::new)
                .collect::<std::result::Result<Vec<_>, _>>()?;

            if dependencies.contains_key(&asset) {
                tracing::warn!(asset = %asset, "Duplicate manifest entry ignored");
                continue;
            }
            dependencies.insert(asset.clone(), forward);
            assets.push(asset);
        }

        Ok(Self {
            project_root,
            assets: RefCell::new(assets),
            dependencies,
            dry_run: false,
        })
    }

    /// Reads the manifest at `manifest_path` and creates the database
    pub fn load(manifest_path: &Path, project_root: PathBuf) -> Result<Self> {
        let manifest = ManifestReader::new().read_manifest(manifest_path)?;
        Self::new(manifest, project_root)
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn delete_from_disk(&self, asset: &AssetPath) -> Result<()> {
        let file_path = resolve_within_root(&self.project_root, asset.as_str())?;
        validate_not_symlink(&file_path, "delete")?;

        if file_path.is_dir() {
            fs::remove_dir_all(&file_path)?;
        } else {
            fs::remove_file(&file_path)?;
        }
        Ok(())
    }
}

impl AssetDatabase for ManifestAssetDatabase {
    fn list_all_assets(&self) -> Result<Vec<AssetPath>> {
        Ok(self.assets.borrow().clone())
    }

    fn direct_dependencies(&self, asset: &AssetPath) -> Result<Vec<AssetPath>> {
        Ok(self.dependencies.get(asset).cloned().unwrap_or_default())
    }

    fn delete_asset(&self, asset: &AssetPath) -> Result<()> {
        if !self.assets.borrow().contains(asset) {
            return Err(UsageError::DeletionFailed {
                path: asset.to_string(),
                details: "Asset is not listed in the dependency manifest".to_string(),
            }
            .into());
        }

        if self.dry_run {
            tracing::info!(asset = %asset, "Dry run: keeping asset file");
        } else {
            self.delete_from_disk(asset)
                .map_err(|e| UsageError::DeletionFailed {
                    path: asset.to_string(),
                    details: e.to_string(),
                })?;
        }

        // A folder takes its listed contents with it
        let folder_prefix = format!("{}/", asset);
        self.assets.borrow_mut().retain(|listed| {
            listed != asset && !listed.as_str().starts_with(&folder_prefix)
        });
        Ok(())
    }
}
