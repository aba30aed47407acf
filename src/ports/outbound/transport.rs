use crate::resource_graph::domain::ResourceKind;
use crate::shared::error::TransportError;
use serde_json::Value;

/// Sw360Transport port for fetching raw resource payloads
///
/// This port abstracts where SW360 HAL documents come from (REST client,
/// on-disk snapshot, test double). Implementations only move JSON; decoding
/// and identity are handled by the graph session.
pub trait Sw360Transport {
    /// Fetches the HAL document of a release
    ///
    /// # Errors
    /// Returns `TransportError::NotFound` if no release has this id
    fn get_release(&self, id: &str) -> Result<Value, TransportError>;

    /// Fetches the HAL document of a component
    fn get_component(&self, id: &str) -> Result<Value, TransportError>;

    /// Fetches the HAL document of a project
    fn get_project(&self, id: &str) -> Result<Value, TransportError>;

    /// Fetches the HAL document of an attachment
    fn get_attachment(&self, id: &str) -> Result<Value, TransportError>;

    /// Dispatches to the typed getter for `kind`
    fn fetch(&self, kind: ResourceKind, id: &str) -> Result<Value, TransportError> {
        match kind {
            ResourceKind::Project => self.get_project(id),
            ResourceKind::Component => self.get_component(id),
            ResourceKind::Release => self.get_release(id),
            ResourceKind::Attachment => self.get_attachment(id),
        }
    }
}
