//! Usage report read model
//!
//! Denormalized, serializable view of a usage search, ready for formatters.

use crate::application::dto::SearchMode;
use serde::Serialize;

/// Main read model for a usage report
#[derive(Debug, Clone, Serialize)]
pub struct UsageReadModel {
    pub metadata: ReportMetadataView,
    pub sections: Vec<UsageSectionView>,
    /// Present only when deletion was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletions: Option<DeletionView>,
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    /// RFC 3339 timestamp of report creation
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// One searched asset and what uses it
#[derive(Debug, Clone, Serialize)]
pub struct UsageSectionView {
    pub asset: String,
    pub mode: SearchMode,
    pub known: bool,
    pub rows: Vec<UsageRowView>,
}

/// One asset that uses the searched asset
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UsageRowView {
    pub file_name: String,
    pub path: String,
    /// Asset sits below a resources directory and may be loaded by name from code
    pub in_resources: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletionView {
    pub deleted: Vec<String>,
    pub failed: Vec<DeletionFailureView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletionFailureView {
    pub path: String,
    pub reason: String,
}
