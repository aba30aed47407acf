use crate::resource_graph::domain::ResourceKind;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - project checked, nothing blocking found
    Success = 0,
    /// At least one linked release is still in OPEN clearing state (with --fail-on-open)
    OpenClearingFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (snapshot access, malformed payload, graph integrity, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::OpenClearingFound => write!(f, "Open Clearing Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures reported by a transport collaborator when fetching raw JSON.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: ResourceKind, id: String },

    #[error("Failed to read {kind} '{id}': {details}")]
    Io {
        kind: ResourceKind,
        id: String,
        details: String,
    },

    #[error("Invalid JSON for {kind} '{id}': {details}")]
    InvalidJson {
        kind: ResourceKind,
        id: String,
        details: String,
    },
}

/// Errors raised while building the resource graph.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An id was assigned that conflicts with the id already set on the same object,
    /// or a set-once relation (parent, user entry) was re-targeted.
    #[error("Resource identity mismatch on {kind}: {existing} is already set, refusing {requested}")]
    IdentityMismatch {
        kind: ResourceKind,
        existing: String,
        requested: String,
    },

    /// Two distinct instances were created for the same (type, id) pair.
    #[error("Duplicate resource: another {kind} instance is already registered for id '{id}'")]
    DuplicateResource { kind: ResourceKind, id: String },

    #[error("Malformed reference '{href}': no trailing id segment")]
    MalformedReference { href: String },

    #[error("Cannot {action}: {kind} has no id")]
    MissingIdentity {
        kind: ResourceKind,
        action: &'static str,
    },

    #[error("Payload embeds {kind} '{id}' while it is still being decoded")]
    CyclicEmbedding { kind: ResourceKind, id: String },

    #[error("Unexpected payload for {kind}: {details}")]
    UnexpectedPayload { kind: ResourceKind, details: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// User-facing errors of the project check command.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Snapshot directory not found: {path}\n\n💡 Hint: {suggestion}")]
    SnapshotNotFound { path: PathBuf, suggestion: String },

    #[error("No project found matching name '{name}' and version '{version}'\n\n💡 Hint: Check the spelling or pass the project id with --id")]
    ProjectNotFound { name: String, version: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for request parameters
    #[error("Validation error: {message}")]
    Validation { message: String },
}
