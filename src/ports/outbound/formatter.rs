use crate::application::dto::ProjectStatus;
use crate::shared::Result;

/// StatusFormatter port for rendering a project clearing status
///
/// This port abstracts the output format (plain text, JSON) of the
/// check-project report.
pub trait StatusFormatter {
    /// Formats the status report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, status: &ProjectStatus) -> Result<String>;
}
