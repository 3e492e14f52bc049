use super::AssetPath;
use crate::shared::error::UsageError;
use std::collections::{HashMap, HashSet};

/// DependencyIndex aggregate: the reverse-dependency mapping of a project
///
/// Maps every known asset to the assets that reference it directly (its
/// dependants), in the order those dependants were scanned.
///
/// Invariants:
/// - every asset of the universe the index was built from has an entry,
///   possibly empty, until it is deleted
/// - no asset is listed as its own dependant
#[derive(Debug, Clone, Default)]
pub struct DependencyIndex {
    dependants: HashMap<AssetPath, Vec<AssetPath>>,
}

impl DependencyIndex {
    /// Builds the index by inverting forward dependency lists
    ///
    /// # Arguments
    /// * `all_assets` - The complete asset universe
    /// * `forward_deps_of` - Direct (non-recursive) dependencies of one asset
    ///
    /// An asset listed more than once is scanned once.
    ///
    /// # Errors
    /// The first error returned by `forward_deps_of` aborts the build.
    pub fn build<F, E>(all_assets: &[AssetPath], mut forward_deps_of: F) -> Result<Self, E>
    where
        F: FnMut(&AssetPath) -> Result<Vec<AssetPath>, E>,
    {
        let mut dependants: HashMap<AssetPath, Vec<AssetPath>> = all_assets
            .iter()
            .map(|asset| (asset.clone(), Vec::new()))
            .collect();

        let mut scanned: HashSet<&AssetPath> = HashSet::with_capacity(all_assets.len());

        for asset in all_assets {
            if !scanned.insert(asset) {
                continue;
            }
            for dependency in forward_deps_of(asset)? {
                if dependency == *asset {
                    continue;
                }
                if let Some(list) = dependants.get_mut(&dependency) {
                    list.push(asset.clone());
                }
            }
        }

        Ok(Self { dependants })
    }

    /// Builds the index from an in-memory forward dependency map
    ///
    /// Assets missing from `forward_map` are treated as having no dependencies.
    pub fn from_forward_map(
        all_assets: &[AssetPath],
        forward_map: &HashMap<AssetPath, Vec<AssetPath>>,
    ) -> Self {
        let result: Result<Self, std::convert::Infallible> = Self::build(all_assets, |asset| {
            Ok(forward_map.get(asset).cloned().unwrap_or_default())
        });
        match result {
            Ok(index) => index,
            Err(never) => match never {},
        }
    }

    /// Returns the direct dependants of a known asset
    ///
    /// # Errors
    /// Returns `UsageError::UnknownAsset` if the asset is not in the index.
    pub fn get_all_dependants(&self, asset: &str) -> Result<&[AssetPath], UsageError> {
        self.dependants
            .get(asset)
            .map(Vec::as_slice)
            .ok_or_else(|| UsageError::unknown_asset(asset))
    }

    /// Tolerant batch lookup
    ///
    /// Unknown assets are bound to an empty list and reported as a warning
    /// instead of failing the whole batch.
    pub fn get_dependants_or_empty<'a, I>(&self, assets: I) -> HashMap<AssetPath, Vec<AssetPath>>
    where
        I: IntoIterator<Item = &'a AssetPath>,
    {
        let mut results = HashMap::new();

        for asset in assets {
            let dependants = match self.dependants.get(asset) {
                Some(list) => list.clone(),
                None => {
                    tracing::warn!(asset = %asset, "Not aware of asset at path {}", asset);
                    Vec::new()
                }
            };
            results.insert(asset.clone(), dependants);
        }

        results
    }

    /// Forgets a deleted asset
    ///
    /// Removes the asset as a key and purges it from every dependant list.
    /// Deleting an asset that is already absent is a no-op. Returns whether
    /// the asset was known.
    pub fn on_asset_deleted(&mut self, asset: &str) -> bool {
        let was_known = self.dependants.remove(asset).is_some();

        for list in self.dependants.values_mut() {
            list.retain(|dependant| dependant.as_str() != asset);
        }

        tracing::debug!(asset, was_known, "Removed deleted asset from dependency index");
        was_known
    }

    pub fn contains(&self, asset: &str) -> bool {
        self.dependants.contains_key(asset)
    }

    pub fn assets(&self) -> impl Iterator<Item = &AssetPath> {
        self.dependants.keys()
    }

    pub fn len(&self) -> usize {
        self.dependants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependants.is_empty()
    }

    /// Total number of direct dependant references across all assets
    pub fn edge_count(&self) -> usize {
        self.dependants.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(p: &str) -> AssetPath {
        AssetPath::new(p).unwrap()
    }

    fn paths(ps: &[&str]) -> Vec<AssetPath> {
        ps.iter().map(|p| path(p)).collect()
    }

    /// U = {A, B, C, D}; F(B) = [A], F(C) = [B], F(D) = []
    fn chain_index() -> DependencyIndex {
        let all = paths(&["A", "B", "C", "D"]);
        let mut forward = HashMap::new();
        forward.insert(path("B"), paths(&["A"]));
        forward.insert(path("C"), paths(&["B"]));
        forward.insert(path("D"), vec![]);
        DependencyIndex::from_forward_map(&all, &forward)
    }

    #[test]
    fn test_build_inverts_forward_dependencies() {
        let index = chain_index();

        assert_eq!(index.get_all_dependants("A").unwrap(), paths(&["B"]).as_slice());
        assert_eq!(index.get_all_dependants("B").unwrap(), paths(&["C"]).as_slice());
        assert!(index.get_all_dependants("C").unwrap().is_empty());
        assert!(index.get_all_dependants("D").unwrap().is_empty());
        assert_eq!(index.len(), 4);
        assert_eq!(index.edge_count(), 2);
    }

    #[test]
    fn test_build_keeps_scan_order() {
        let all = paths(&["Shared.png", "Z.mat", "A.mat", "M.mat"]);
        let mut forward = HashMap::new();
        for material in ["Z.mat", "A.mat", "M.mat"] {
            forward.insert(path(material), paths(&["Shared.png"]));
        }

        let index = DependencyIndex::from_forward_map(&all, &forward);

        assert_eq!(
            index.get_all_dependants("Shared.png").unwrap(),
            paths(&["Z.mat", "A.mat", "M.mat"]).as_slice()
        );
    }

    #[test]
    fn test_build_ignores_self_dependency() {
        let all = paths(&["A", "B"]);
        let mut forward = HashMap::new();
        forward.insert(path("A"), paths(&["A"]));
        forward.insert(path("B"), paths(&["B", "A"]));

        let index = DependencyIndex::from_forward_map(&all, &forward);

        assert_eq!(index.get_all_dependants("A").unwrap(), paths(&["B"]).as_slice());
        assert!(index.get_all_dependants("B").unwrap().is_empty());
    }

    #[test]
    fn test_build_ignores_dependencies_outside_universe() {
        let all = paths(&["A"]);
        let mut forward = HashMap::new();
        forward.insert(path("A"), paths(&["Library/builtin.shader"]));

        let index = DependencyIndex::from_forward_map(&all, &forward);

        assert!(!index.contains("Library/builtin.shader"));
        assert_eq!(index.len(), 1);
        assert_eq!(index.edge_count(), 0);
    }

    #[test]
    fn test_build_propagates_first_error() {
        let all = paths(&["A", "B", "C"]);
        let mut calls = 0;

        let result: Result<DependencyIndex, String> = DependencyIndex::build(&all, |asset| {
            calls += 1;
            if asset.as_str() == "B" {
                Err("host unavailable".to_string())
            } else {
                Ok(vec![])
            }
        });

        assert_eq!(result.unwrap_err(), "host unavailable");
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_build_scans_repeated_asset_once() {
        let all = paths(&["A", "B", "B"]);
        let mut calls = 0;

        let result: Result<DependencyIndex, String> = DependencyIndex::build(&all, |asset| {
            calls += 1;
            if asset.as_str() == "B" {
                Ok(paths(&["A"]))
            } else {
                Ok(vec![])
            }
        });
        let index = result.unwrap();

        assert_eq!(calls, 2);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get_all_dependants("A").unwrap(), paths(&["B"]).as_slice());
        assert_eq!(index.edge_count(), 1);
    }

    #[test]
    fn test_get_all_dependants_unknown_asset() {
        let index = chain_index();
        let err = index.get_all_dependants("Z").unwrap_err();
        assert_eq!(err, UsageError::unknown_asset("Z"));
    }

    #[test]
    fn test_get_dependants_or_empty_tolerates_unknown() {
        let index = chain_index();
        let requested = paths(&["A", "Z"]);

        let results = index.get_dependants_or_empty(&requested);

        assert_eq!(results.len(), 2);
        assert_eq!(results[&path("A")], paths(&["B"]));
        assert!(results[&path("Z")].is_empty());
    }

    #[test]
    fn test_on_asset_deleted_removes_key_and_references() {
        let mut index = chain_index();

        assert!(index.on_asset_deleted("B"));

        assert!(!index.contains("B"));
        assert!(index.get_all_dependants("A").unwrap().is_empty());
        assert!(index.get_all_dependants("B").unwrap_err().is_unknown_asset());
        assert!(index.assets().all(|asset| index
            .get_all_dependants(asset.as_str())
            .unwrap()
            .iter()
            .all(|d| d.as_str() != "B")));
    }

    #[test]
    fn test_on_asset_deleted_is_idempotent() {
        let mut index = chain_index();

        assert!(index.on_asset_deleted("C"));
        let edges_after_first = index.edge_count();
        assert!(!index.on_asset_deleted("C"));

        assert_eq!(index.len(), 3);
        assert_eq!(index.edge_count(), edges_after_first);
    }

    #[test]
    fn test_on_asset_deleted_removes_duplicate_references() {
        let all = paths(&["A", "B"]);
        let mut forward = HashMap::new();
        forward.insert(path("B"), paths(&["A", "A"]));
        let mut index = DependencyIndex::from_forward_map(&all, &forward);
        assert_eq!(index.get_all_dependants("A").unwrap().len(), 2);

        index.on_asset_deleted("B");

        assert!(index.get_all_dependants("A").unwrap().is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = DependencyIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.edge_count(), 0);
    }
}
