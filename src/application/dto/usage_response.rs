use super::{DeletionReport, SearchMode};
use crate::dependency_tracking::domain::AssetPath;

/// Result of one searched asset
#[derive(Debug, Clone)]
pub struct UsageSection {
    /// The asset whose usages were searched
    pub asset: AssetPath,
    pub mode: SearchMode,
    /// False only for a direct search on an asset the index does not know
    pub known: bool,
    /// Assets found, sorted by display name
    pub assets: Vec<AssetPath>,
}

/// UsageResponse - Internal response DTO from the find-usages use case
#[derive(Debug, Clone, Default)]
pub struct UsageResponse {
    pub sections: Vec<UsageSection>,
    /// Present only when deletion was requested
    pub deletion: Option<DeletionReport>,
}

impl UsageResponse {
    pub fn new(sections: Vec<UsageSection>, deletion: Option<DeletionReport>) -> Self {
        Self { sections, deletion }
    }

    /// Whether any requested deletion failed
    pub fn has_deletion_failures(&self) -> bool {
        self.deletion
            .as_ref()
            .is_some_and(|report| !report.failed.is_empty())
    }
}
