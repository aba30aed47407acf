/// Filesystem adapters: snapshot payloads in, reports out
mod file_writer;
mod snapshot_transport;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use snapshot_transport::SnapshotTransport;
