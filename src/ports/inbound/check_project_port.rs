use crate::application::dto::{CheckProjectRequest, ProjectStatus};
use crate::shared::Result;

/// CheckProjectPort - Inbound port for the project clearing check
///
/// This port defines the interface the CLI uses to trigger a check of one
/// project's releases. It represents the application's public API.
pub trait CheckProjectPort {
    /// Resolves the requested project and collects the status of its releases
    ///
    /// # Errors
    /// Returns an error if:
    /// - The project cannot be found by id or by name and version
    /// - A payload cannot be fetched or violates graph integrity
    fn check_project(&mut self, request: &CheckProjectRequest) -> Result<ProjectStatus>;
}
