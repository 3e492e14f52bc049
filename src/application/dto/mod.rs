/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod deletion_report;
mod output_format;
mod usage_request;
mod usage_response;

pub use deletion_report::{DeletionFailure, DeletionReport};
pub use output_format::OutputFormat;
pub use usage_request::{SearchMode, UsageRequest};
pub use usage_response::{UsageResponse, UsageSection};
