/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (host asset database, console, files).
pub mod asset_database;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use asset_database::AssetDatabase;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
