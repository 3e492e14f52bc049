use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use what_uses_this::prelude::*;

/// Mock AssetDatabase holding an in-memory asset graph
///
/// Deletions are recorded and remove the asset from later listings. Assets
/// registered with `with_failing_delete` refuse to be deleted.
#[derive(Default, Clone)]
pub struct MockAssetDatabase {
    assets: Arc<Mutex<Vec<AssetPath>>>,
    dependencies: HashMap<AssetPath, Vec<AssetPath>>,
    failing: HashSet<AssetPath>,
    pub deleted: Arc<Mutex<Vec<String>>>,
    pub list_calls: Arc<Mutex<usize>>,
}

impl MockAssetDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, path: &str, dependencies: &[&str]) -> Self {
        let asset = AssetPath::new(path).unwrap();
        self.dependencies.insert(
            asset.clone(),
            dependencies
                .iter()
                .map(|d| AssetPath::new(*d).unwrap())
                .collect(),
        );
        self.assets.lock().unwrap().push(asset);
        self
    }

    pub fn with_failing_delete(mut self, path: &str) -> Self {
        self.failing.insert(AssetPath::new(path).unwrap());
        self
    }

    pub fn deleted_assets(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn list_call_count(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

impl AssetDatabase for MockAssetDatabase {
    fn list_all_assets(&self) -> Result<Vec<AssetPath>> {
        *self.list_calls.lock().unwrap() += 1;
        Ok(self.assets.lock().unwrap().clone())
    }

    fn direct_dependencies(&self, asset: &AssetPath) -> Result<Vec<AssetPath>> {
        Ok(self.dependencies.get(asset).cloned().unwrap_or_default())
    }

    fn delete_asset(&self, asset: &AssetPath) -> Result<()> {
        if self.failing.contains(asset) {
            return Err(UsageError::DeletionFailed {
                path: asset.to_string(),
                details: "asset is locked".to_string(),
            }
            .into());
        }
        self.assets.lock().unwrap().retain(|listed| listed != asset);
        self.deleted.lock().unwrap().push(asset.to_string());
        Ok(())
    }
}
