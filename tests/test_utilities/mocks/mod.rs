/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_transport;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_transport::MockTransport;
