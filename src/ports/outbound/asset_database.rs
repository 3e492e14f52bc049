use crate::dependency_tracking::domain::AssetPath;
use crate::shared::Result;

/// AssetDatabase port: the capabilities the host content database provides
///
/// This port abstracts the host's asset database so the dependency index can
/// be built and kept in sync without knowing where assets live.
pub trait AssetDatabase {
    /// Lists every asset of the project, in the host's order
    ///
    /// # Errors
    /// Returns an error if the host cannot enumerate its assets
    fn list_all_assets(&self) -> Result<Vec<AssetPath>>;

    /// Returns the assets `asset` references directly (non-recursive)
    ///
    /// The list may contain assets outside the project (built-ins, packages)
    /// and may contain `asset` itself; callers filter both.
    fn direct_dependencies(&self, asset: &AssetPath) -> Result<Vec<AssetPath>>;

    /// Deletes an asset from the project
    ///
    /// # Errors
    /// Returns an error if the asset could not be deleted. Nothing about the
    /// asset may be assumed to have changed in that case.
    fn delete_asset(&self, asset: &AssetPath) -> Result<()>;
}
