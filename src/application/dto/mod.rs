/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the resource graph isolated.
mod check_project_request;
mod output_format;
mod project_status;

pub use check_project_request::{CheckProjectRequest, ProjectSelector};
pub use output_format::OutputFormat;
pub use project_status::{LinkedProjectView, ProjectStatus, ReleaseStatusView, OPEN_STATE};
