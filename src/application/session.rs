use crate::application::dto::{DeletionFailure, DeletionReport};
use crate::dependency_tracking::domain::{
    AssetPath, DependencyIndex, InvolvedAsset, DEFAULT_RESOURCES_MARKER,
};
use crate::dependency_tracking::services::ClosureFinder;
use crate::ports::outbound::{AssetDatabase, ProgressReporter};
use crate::shared::Result;
use std::collections::HashMap;

/// UsageSession - the state of one interactive usage search
///
/// Owns the dependency index and the current result rows. The index is built
/// lazily on the first search and then kept in sync with every deletion the
/// session performs; it is never rebuilt until the session is cleared.
///
/// # Type Parameters
/// * `DB` - AssetDatabase implementation
/// * `PR` - ProgressReporter implementation
pub struct UsageSession<DB, PR> {
    database: DB,
    progress_reporter: PR,
    resources_marker: String,
    index: Option<DependencyIndex>,
    involved_assets: Vec<InvolvedAsset>,
    expected_project_changes: usize,
}

impl<DB, PR> UsageSession<DB, PR>
where
    DB: AssetDatabase,
    PR: ProgressReporter,
{
    pub fn new(database: DB, progress_reporter: PR) -> Self {
        Self {
            database,
            progress_reporter,
            resources_marker: DEFAULT_RESOURCES_MARKER.to_string(),
            index: None,
            involved_assets: Vec::new(),
            expected_project_changes: 0,
        }
    }

    /// Overrides the directory marker used to flag runtime-loadable assets
    pub fn with_resources_marker(mut self, marker: impl Into<String>) -> Self {
        self.resources_marker = marker.into();
        self
    }

    pub fn resources_marker(&self) -> &str {
        &self.resources_marker
    }

    pub fn database(&self) -> &DB {
        &self.database
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// The dependency index, if a search has built it
    pub fn index(&self) -> Option<&DependencyIndex> {
        self.index.as_ref()
    }

    pub fn involved_assets(&self) -> &[InvolvedAsset] {
        &self.involved_assets
    }

    /// Finds every asset that directly or indirectly uses `start`
    ///
    /// Replaces the current result rows; all rows start unchecked.
    ///
    /// # Errors
    /// Fails with `UsageError::UnknownAsset` if `start` is not in the index,
    /// or with the host's error if the index had to be built and that failed.
    pub fn find_usages_of(&mut self, start: &str) -> Result<&[InvolvedAsset]> {
        let index = self.ensure_index()?;
        let closure = ClosureFinder::find_transitive_dependants(start, index)?;

        self.involved_assets = closure.into_iter().map(InvolvedAsset::new).collect();
        Ok(&self.involved_assets)
    }

    /// Whether the index knows `asset`, building the index if needed
    pub fn is_known(&mut self, asset: &str) -> Result<bool> {
        Ok(self.ensure_index()?.contains(asset))
    }

    /// Direct dependants of each asset, tolerating unknown assets
    pub fn direct_dependants(
        &mut self,
        assets: &[AssetPath],
    ) -> Result<HashMap<AssetPath, Vec<AssetPath>>> {
        let index = self.ensure_index()?;
        Ok(index.get_dependants_or_empty(assets))
    }

    /// Sets the selection state of one row. Returns false if no row matches.
    pub fn set_checked(&mut self, asset: &str, checked: bool) -> bool {
        match self
            .involved_assets
            .iter_mut()
            .find(|row| row.path().as_str() == asset)
        {
            Some(row) => {
                row.set_checked(checked);
                true
            }
            None => false,
        }
    }

    /// Checks every row, or unchecks every row if all are already checked
    pub fn toggle_select_all(&mut self) {
        let check = self.involved_assets.iter().any(|row| !row.is_checked());
        for row in &mut self.involved_assets {
            row.set_checked(check);
        }
    }

    /// Deletes every checked row through the host
    ///
    /// Each successful deletion removes the row, forgets the asset in the
    /// index and is counted as an expected project change. A failed deletion
    /// leaves the row and the index untouched and is recorded in the report.
    pub fn delete_selected(&mut self) -> DeletionReport {
        let selected: Vec<AssetPath> = self
            .involved_assets
            .iter()
            .filter(|row| row.is_checked())
            .map(|row| row.path().clone())
            .collect();

        let mut report = DeletionReport::default();

        for asset in selected {
            // Already gone with a deleted folder
            if report.contains_deleted(asset.as_str()) {
                continue;
            }
            match self.database.delete_asset(&asset) {
                Ok(()) => {
                    self.expected_project_changes += 1;
                    let contents = self.remove_deleted_asset(&asset);
                    tracing::info!(asset = %asset, contents = contents.len(), "Deleted asset");
                    report.deleted.push(asset);
                    report.deleted.extend(contents);
                }
                Err(e) => {
                    tracing::warn!(asset = %asset, error = %e, "Failed to delete asset");
                    self.progress_reporter
                        .report_error(&format!("⚠️  Failed to delete {}: {}", asset, e));
                    report.failed.push(DeletionFailure {
                        asset,
                        reason: e.to_string(),
                    });
                }
            }
        }

        report
    }

    /// Handles a change notification from the host
    ///
    /// Changes caused by this session's own deletions are consumed. Any other
    /// change may have invalidated the index, so the session is cleared.
    pub fn on_project_change(&mut self) {
        if self.expected_project_changes > 0 {
            self.expected_project_changes -= 1;
        } else {
            tracing::debug!("Unexpected project change, clearing usage session");
            self.clear();
        }
    }

    /// Whether deletions are still waiting for their change notifications
    pub fn is_waiting_for_project_changes(&self) -> bool {
        self.expected_project_changes > 0
    }

    /// Drops the index and all results
    pub fn clear(&mut self) {
        self.index = None;
        self.involved_assets.clear();
        self.expected_project_changes = 0;
    }

    /// Forgets a deleted asset and, for a folder, every indexed asset inside it
    ///
    /// Returns the forgotten folder contents.
    fn remove_deleted_asset(&mut self, asset: &AssetPath) -> Vec<AssetPath> {
        let folder_prefix = format!("{}/", asset);
        let is_inside = |candidate: &AssetPath| candidate.as_str().starts_with(&folder_prefix);

        self.involved_assets
            .retain(|row| row.path() != asset && !is_inside(row.path()));

        let Some(index) = self.index.as_mut() else {
            return Vec::new();
        };
        let mut contents: Vec<AssetPath> = index
            .assets()
            .filter(|candidate| candidate.as_str().starts_with(&folder_prefix))
            .cloned()
            .collect();
        ClosureFinder::sort_by_display_name(&mut contents);

        index.on_asset_deleted(asset.as_str());
        for inner in &contents {
            index.on_asset_deleted(inner.as_str());
        }
        contents
    }

    fn ensure_index(&mut self) -> Result<&DependencyIndex> {
        let index = match self.index.take() {
            Some(index) => index,
            None => self.build_index()?,
        };
        Ok(self.index.insert(index))
    }

    fn build_index(&self) -> Result<DependencyIndex> {
        let all_assets = self.database.list_all_assets()?;
        let total = all_assets.len();

        self.progress_reporter.report(&format!(
            "🔍 Building asset dependency graph ({} asset(s))...",
            total
        ));

        let mut scanned = 0;
        let index = DependencyIndex::build(&all_assets, |asset| {
            scanned += 1;
            self.progress_reporter
                .report_progress(scanned, total, Some("Building graph..."));
            self.database.direct_dependencies(asset)
        })?;

        tracing::debug!(
            assets = index.len(),
            references = index.edge_count(),
            "Built dependency index"
        );
        self.progress_reporter.report_completion(&format!(
            "✅ Indexed {} asset(s) with {} reference(s)",
            index.len(),
            index.edge_count()
        ));

        Ok(index)
    }
}
