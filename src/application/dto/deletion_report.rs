use crate::dependency_tracking::domain::AssetPath;

/// An asset the host refused to delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    pub asset: AssetPath,
    pub reason: String,
}

/// Outcome of deleting the selected assets of a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    /// Assets deleted, in deletion order
    pub deleted: Vec<AssetPath>,
    pub failed: Vec<DeletionFailure>,
}

impl DeletionReport {
    /// Folds another report into this one
    pub fn merge(&mut self, other: DeletionReport) {
        self.deleted.extend(other.deleted);
        self.failed.extend(other.failed);
    }

    pub fn contains_deleted(&self, asset: &str) -> bool {
        self.deleted.iter().any(|deleted| deleted.as_str() == asset)
    }
}
