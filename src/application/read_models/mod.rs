//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that give formatters a flat representation of a
//! usage search.

pub mod usage_read_model;
pub mod usage_read_model_builder;

pub use usage_read_model::{
    DeletionFailureView, DeletionView, ReportMetadataView, UsageReadModel, UsageRowView,
    UsageSectionView,
};
pub use usage_read_model_builder::UsageReadModelBuilder;
