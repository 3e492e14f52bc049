use crate::application::dto::{
    DeletionReport, SearchMode, UsageRequest, UsageResponse, UsageSection,
};
use crate::application::session::UsageSession;
use crate::dependency_tracking::domain::AssetPath;
use crate::dependency_tracking::services::ClosureFinder;
use crate::ports::outbound::{AssetDatabase, ProgressReporter};
use crate::shared::error::UsageError;
use crate::shared::Result;

/// FindUsagesUseCase - answers "what uses this asset?" for a batch of assets
///
/// This use case drives a `UsageSession` the way an interactive user would:
/// search, optionally select everything found and delete it.
///
/// # Type Parameters
/// * `DB` - AssetDatabase implementation
/// * `PR` - ProgressReporter implementation
pub struct FindUsagesUseCase<DB, PR> {
    session: UsageSession<DB, PR>,
}

impl<DB, PR> FindUsagesUseCase<DB, PR>
where
    DB: AssetDatabase,
    PR: ProgressReporter,
{
    pub fn new(session: UsageSession<DB, PR>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &UsageSession<DB, PR> {
        &self.session
    }

    /// Executes the search described by `request`
    ///
    /// # Errors
    /// Returns an error if:
    /// - an asset path is empty
    /// - the dependency index cannot be built
    /// - a transitive search starts at an asset the index does not know; this
    ///   is checked for every requested asset before any deletion
    ///
    /// Failed deletions are not errors; they are listed in the response.
    pub fn execute(&mut self, request: UsageRequest) -> Result<UsageResponse> {
        let assets = request
            .assets
            .iter()
            .map(|asset| AssetPath::new(asset.as_str()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        match request.mode {
            SearchMode::Direct => {
                if request.delete {
                    anyhow::bail!(
                        "Deletion is only supported for transitive searches.\n\n💡 Hint: Drop --direct to delete everything that uses the asset"
                    );
                }
                self.find_direct_dependants(&assets)
            }
            SearchMode::Transitive => self.find_transitive_usages(&assets, request.delete),
        }
    }

    fn find_transitive_usages(
        &mut self,
        assets: &[AssetPath],
        delete: bool,
    ) -> Result<UsageResponse> {
        // Every start must be known before anything is deleted
        for asset in assets {
            if !self.session.is_known(asset.as_str())? {
                return Err(UsageError::unknown_asset(asset.as_str()).into());
            }
        }

        let mut sections = Vec::with_capacity(assets.len());
        let mut deletion = delete.then(DeletionReport::default);

        for asset in assets {
            if let Some(report) = deletion.as_ref() {
                if report.contains_deleted(asset.as_str()) {
                    self.session.progress_reporter().report(&format!(
                        "⏭️  Skipping {}: already deleted in this run",
                        asset
                    ));
                    continue;
                }
            }

            let found: Vec<AssetPath> = self
                .session
                .find_usages_of(asset.as_str())?
                .iter()
                .map(|row| row.path().clone())
                .collect();
            self.session.progress_reporter().report(&format!(
                "📊 {} is used by {} other asset(s)",
                asset,
                found.len().saturating_sub(1)
            ));

            sections.push(UsageSection {
                asset: asset.clone(),
                mode: SearchMode::Transitive,
                known: true,
                assets: found,
            });

            if let Some(report) = deletion.as_mut() {
                self.session.toggle_select_all();
                report.merge(self.session.delete_selected());
            }
        }

        if let Some(report) = deletion.as_ref() {
            self.session.progress_reporter().report_completion(&format!(
                "🗑️  Deleted {} asset(s), {} failure(s)",
                report.deleted.len(),
                report.failed.len()
            ));
        }

        Ok(UsageResponse::new(sections, deletion))
    }

    fn find_direct_dependants(&mut self, assets: &[AssetPath]) -> Result<UsageResponse> {
        let results = self.session.direct_dependants(assets)?;

        let sections = assets
            .iter()
            .map(|asset| {
                let known = self
                    .session
                    .index()
                    .is_some_and(|index| index.contains(asset.as_str()));
                let mut dependants = results.get(asset).cloned().unwrap_or_default();
                ClosureFinder::sort_by_display_name(&mut dependants);
                dependants.dedup();

                if !known {
                    self.session.progress_reporter().report_error(&format!(
                        "⚠️  Warning: {} is not part of the asset database",
                        asset
                    ));
                }

                UsageSection {
                    asset: asset.clone(),
                    mode: SearchMode::Direct,
                    known,
                    assets: dependants,
                }
            })
            .collect();

        Ok(UsageResponse::new(sections, None))
    }
}
