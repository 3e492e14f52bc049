//! Builder for constructing UsageReadModel from a use case response

use super::usage_read_model::{
    DeletionFailureView, DeletionView, ReportMetadataView, UsageReadModel, UsageRowView,
    UsageSectionView,
};
use crate::application::dto::{DeletionReport, UsageResponse, UsageSection};
use chrono::Utc;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing UsageReadModel from a UsageResponse
pub struct UsageReadModelBuilder;

impl UsageReadModelBuilder {
    /// Builds the read model
    ///
    /// # Arguments
    /// * `response` - Response of the find-usages use case
    /// * `resources_marker` - Directory marker used to flag runtime-loadable assets
    pub fn build(response: &UsageResponse, resources_marker: &str) -> UsageReadModel {
        UsageReadModel {
            metadata: Self::build_metadata(),
            sections: response
                .sections
                .iter()
                .map(|section| Self::build_section(section, resources_marker))
                .collect(),
            deletions: response.deletion.as_ref().map(Self::build_deletions),
        }
    }

    fn build_metadata() -> ReportMetadataView {
        ReportMetadataView {
            timestamp: Utc::now().to_rfc3339(),
            tool_name: TOOL_NAME.to_string(),
            tool_version: TOOL_VERSION.to_string(),
        }
    }

    fn build_section(section: &UsageSection, resources_marker: &str) -> UsageSectionView {
        UsageSectionView {
            asset: section.asset.to_string(),
            mode: section.mode,
            known: section.known,
            rows: section
                .assets
                .iter()
                .map(|asset| UsageRowView {
                    file_name: asset.file_name().to_string(),
                    path: asset.to_string(),
                    in_resources: asset.is_in_resources(resources_marker),
                })
                .collect(),
        }
    }

    fn build_deletions(report: &DeletionReport) -> DeletionView {
        DeletionView {
            deleted: report.deleted.iter().map(ToString::to_string).collect(),
            failed: report
                .failed
                .iter()
                .map(|failure| DeletionFailureView {
                    path: failure.asset.to_string(),
                    reason: failure.reason.clone(),
                })
                .collect(),
        }
    }
}
