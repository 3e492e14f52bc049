/// Mock implementations for testing
mod mock_asset_database;
mod mock_progress_reporter;

pub use mock_asset_database::MockAssetDatabase;
pub use mock_progress_reporter::MockProgressReporter;
