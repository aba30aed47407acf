/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (SW360 data, file system, console).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_search;
pub mod transport;

pub use formatter::StatusFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_search::ProjectSearch;
pub use transport::Sw360Transport;
