use crate::dependency_tracking::domain::{AssetPath, DependencyIndex};
use crate::shared::error::UsageError;
use std::collections::{HashSet, VecDeque};

/// ClosureFinder service for computing transitive dependants
///
/// Pure graph traversal over a `DependencyIndex`, no I/O.
pub struct ClosureFinder;

impl ClosureFinder {
    /// Finds every asset that directly or indirectly depends on `start`
    ///
    /// Breadth-first walk over the dependant relation. An asset is enqueued at
    /// most once, so cycles terminate.
    ///
    /// # Returns
    /// All assets reached, `start` included, sorted by display name
    /// (ordinal), ties broken by full path.
    ///
    /// # Errors
    /// Returns `UsageError::UnknownAsset` if `start` (or any reached asset) is
    /// not in the index.
    pub fn find_transitive_dependants(
        start: &str,
        index: &DependencyIndex,
    ) -> Result<Vec<AssetPath>, UsageError> {
        let start = AssetPath::new(start).map_err(|_| UsageError::unknown_asset(start))?;

        let mut pending = VecDeque::new();
        let mut visited: HashSet<AssetPath> = HashSet::new();

        visited.insert(start.clone());
        pending.push_back(start);

        while let Some(visiting) = pending.pop_front() {
            for dependant in index.get_all_dependants(visiting.as_str())? {
                if visited.insert(dependant.clone()) {
                    pending.push_back(dependant.clone());
                }
            }
        }

        tracing::debug!(count = visited.len(), "Computed transitive dependants");

        let mut results: Vec<AssetPath> = visited.into_iter().collect();
        Self::sort_by_display_name(&mut results);
        Ok(results)
    }

    /// Sorts assets by display name using ordinal comparison
    pub fn sort_by_display_name(assets: &mut [AssetPath]) {
        assets.sort_by(|a, b| {
            a.file_name()
                .cmp(b.file_name())
                .then_with(|| a.as_str().cmp(b.as_str()))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn path(p: &str) -> AssetPath {
        AssetPath::new(p).unwrap()
    }

    fn paths(ps: &[&str]) -> Vec<AssetPath> {
        ps.iter().map(|p| path(p)).collect()
    }

    fn index_of(all: &[&str], edges: &[(&str, &[&str])]) -> DependencyIndex {
        let mut forward = HashMap::new();
        for (asset, deps) in edges {
            forward.insert(path(asset), paths(deps));
        }
        DependencyIndex::from_forward_map(&paths(all), &forward)
    }

    #[test]
    fn test_chain_closure() {
        let index = index_of(
            &["A", "B", "C", "D"],
            &[("B", &["A"]), ("C", &["B"]), ("D", &[])],
        );

        let result = ClosureFinder::find_transitive_dependants("A", &index).unwrap();

        assert_eq!(result, paths(&["A", "B", "C"]));
    }

    #[test]
    fn test_closure_after_deletion() {
        let mut index = index_of(
            &["A", "B", "C", "D"],
            &[("B", &["A"]), ("C", &["B"]), ("D", &[])],
        );
        index.on_asset_deleted("B");

        let result = ClosureFinder::find_transitive_dependants("A", &index).unwrap();

        assert_eq!(result, paths(&["A"]));
    }

    #[test]
    fn test_unknown_start_fails() {
        let index = index_of(&["A"], &[]);
        let err = ClosureFinder::find_transitive_dependants("Z", &index).unwrap_err();
        assert!(err.is_unknown_asset());
    }

    #[test]
    fn test_empty_start_is_unknown() {
        let index = index_of(&["A"], &[]);
        let err = ClosureFinder::find_transitive_dependants("", &index).unwrap_err();
        assert!(err.is_unknown_asset());
    }

    #[test]
    fn test_closure_includes_start_without_dependants() {
        let index = index_of(&["Assets/Lonely.png"], &[]);
        let result =
            ClosureFinder::find_transitive_dependants("Assets/Lonely.png", &index).unwrap();
        assert_eq!(result, paths(&["Assets/Lonely.png"]));
    }

    #[test]
    fn test_diamond_reports_each_asset_once() {
        // Tex <- MatA, MatB <- Prefab
        let index = index_of(
            &["Tex.png", "MatA.mat", "MatB.mat", "Prefab.prefab"],
            &[
                ("MatA.mat", &["Tex.png"]),
                ("MatB.mat", &["Tex.png"]),
                ("Prefab.prefab", &["MatA.mat", "MatB.mat"]),
            ],
        );

        let result = ClosureFinder::find_transitive_dependants("Tex.png", &index).unwrap();

        assert_eq!(
            result,
            paths(&["MatA.mat", "MatB.mat", "Prefab.prefab", "Tex.png"])
        );
    }

    #[test]
    fn test_cycle_terminates() {
        let index = index_of(
            &["A", "B", "C"],
            &[("A", &["C"]), ("B", &["A"]), ("C", &["B"])],
        );

        let result = ClosureFinder::find_transitive_dependants("A", &index).unwrap();

        assert_eq!(result, paths(&["A", "B", "C"]));
    }

    #[test]
    fn test_nested_paths_are_followed() {
        // A folder-like parent path and its child must not hide each other.
        let index = index_of(
            &["Assets/Scene", "Assets/Scene/Lighting.asset"],
            &[("Assets/Scene/Lighting.asset", &["Assets/Scene"])],
        );

        let result = ClosureFinder::find_transitive_dependants("Assets/Scene", &index).unwrap();

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_sorted_by_display_name_not_full_path() {
        let index = index_of(
            &["Assets/Z/base.png", "Assets/A/zebra.mat", "Assets/Z/apple.mat"],
            &[
                ("Assets/A/zebra.mat", &["Assets/Z/base.png"]),
                ("Assets/Z/apple.mat", &["Assets/Z/base.png"]),
            ],
        );

        let result =
            ClosureFinder::find_transitive_dependants("Assets/Z/base.png", &index).unwrap();

        assert_eq!(
            result,
            paths(&["Assets/Z/apple.mat", "Assets/Z/base.png", "Assets/A/zebra.mat"])
        );
        assert!(result
            .windows(2)
            .all(|pair| pair[0].file_name() <= pair[1].file_name()));
    }

    #[test]
    fn test_ordinal_comparison_puts_uppercase_first() {
        let mut assets = paths(&["x/beta.mat", "y/Alpha.mat", "z/_under.mat"]);
        ClosureFinder::sort_by_display_name(&mut assets);
        assert_eq!(assets, paths(&["y/Alpha.mat", "z/_under.mat", "x/beta.mat"]));
    }

    #[test]
    fn test_same_display_name_ordered_by_path() {
        let index = index_of(
            &["Shared.png", "b/Mat.mat", "a/Mat.mat"],
            &[("b/Mat.mat", &["Shared.png"]), ("a/Mat.mat", &["Shared.png"])],
        );

        let result = ClosureFinder::find_transitive_dependants("Shared.png", &index).unwrap();

        assert_eq!(result, paths(&["a/Mat.mat", "b/Mat.mat", "Shared.png"]));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let index = index_of(
            &["A", "B", "C", "D"],
            &[("B", &["A"]), ("C", &["A", "B"]), ("D", &["C"])],
        );

        let first = ClosureFinder::find_transitive_dependants("A", &index).unwrap();
        let second = ClosureFinder::find_transitive_dependants("A", &index).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, paths(&["A", "B", "C", "D"]));
    }
}
