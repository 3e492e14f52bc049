use crate::application::read_models::UsageReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering usage search results
///
/// This port abstracts the rendering of a usage report into a concrete
/// output format (plain text, Markdown, JSON).
pub trait ReportFormatter {
    /// Formats the usage report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &UsageReadModel) -> Result<String>;
}
