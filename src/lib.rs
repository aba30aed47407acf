//! sw360-graph - identity-mapped resource graph for SW360 HAL payloads
//!
//! Decodes SW360 REST documents (projects, components, releases and
//! attachments) into typed resources. A per-session registry guarantees one
//! instance per `(kind, id)`, and a normalizer turns every encoding of
//! `externalIds` package URLs into parsed `Purl` values.
//!
//! # Architecture
//!
//! - **Resource graph** (`resource_graph`): domain types, registry, decoder
//! - **Application Layer** (`application`): check-project use case and DTOs
//! - **Ports** (`ports`): transport, search, formatter and console interfaces
//! - **Adapters** (`adapters`): snapshot transport, formatters, console output
//! - **Shared** (`shared`): error types and helpers
//!
//! # Example
//!
//! ```
//! use sw360_graph::prelude::*;
//! use serde_json::json;
//!
//! let mut session = GraphSession::new();
//! let component: Shared<Component> = session
//!     .decode_new(&json!({
//!         "name": "acl",
//!         "_links": {"self": {"href": "https://sw360/resource/api/components/123"}},
//!         "_embedded": {"sw360:releases": [{
//!             "name": "acl",
//!             "version": "1.4",
//!             "_links": {"self": {"href": "https://sw360/resource/api/releases/7c4"}}
//!         }]}
//!     }))
//!     .unwrap();
//!
//! let release = component.borrow().releases["7c4"].clone();
//! assert_eq!(release.borrow().parent().unwrap().id(), "123");
//! assert_eq!(session.registry().len(), 2);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod resource_graph;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, SnapshotTransport, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonStatusFormatter, TextStatusFormatter};
    pub use crate::application::dto::{CheckProjectRequest, OutputFormat, ProjectStatus};
    pub use crate::application::use_cases::CheckProjectUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ProjectSearch, StatusFormatter, Sw360Transport,
    };
    pub use crate::resource_graph::domain::{
        Attachment, Component, Link, Project, Purl, Release, Resource, ResourceHandle,
        ResourceKind, ResourceLink, Shared,
    };
    pub use crate::resource_graph::services::{
        normalize_external_ids, GraphSession, Registry,
    };
    pub use crate::shared::error::{ResourceError, TransportError};
    pub use crate::shared::Result;
}
