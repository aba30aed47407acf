use crate::ports::outbound::{ProjectSearch, Sw360Transport};
use crate::resource_graph::domain::ResourceKind;
use crate::shared::error::TransportError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum payload size for security (20 MB)
const MAX_PAYLOAD_SIZE: u64 = 20 * 1024 * 1024;

/// SnapshotTransport adapter serving SW360 payloads from a directory
///
/// Layout: `<root>/<projects|components|releases|attachments>/<id>.json`,
/// each file holding the HAL document the REST API returned for that id.
/// Implements both the Sw360Transport and ProjectSearch ports.
pub struct SnapshotTransport {
    root: PathBuf,
}

impl SnapshotTransport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn payload_path(&self, kind: ResourceKind, id: &str) -> PathBuf {
        self.root.join(kind.collection()).join(format!("{}.json", id))
    }

    /// Reads and parses one payload file with security checks:
    /// - Reject ids that would escape the collection directory
    /// - Reject symbolic links and non-regular files
    /// - Check file size limits
    fn read_payload(&self, kind: ResourceKind, id: &str) -> Result<Value, TransportError> {
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(TransportError::Io {
                kind,
                id: id.to_string(),
                details: "Security: id is not a plain file name".to_string(),
            });
        }

        let path = self.payload_path(kind, id);
        let metadata = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TransportError::NotFound {
                    kind,
                    id: id.to_string(),
                })
            }
            Err(e) => {
                return Err(TransportError::Io {
                    kind,
                    id: id.to_string(),
                    details: e.to_string(),
                })
            }
        };

        let io_error = |details: String| TransportError::Io {
            kind,
            id: id.to_string(),
            details,
        };

        if metadata.is_symlink() {
            return Err(io_error(format!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            )));
        }
        if !metadata.is_file() {
            return Err(io_error(format!("{} is not a regular file", path.display())));
        }
        if metadata.len() > MAX_PAYLOAD_SIZE {
            return Err(io_error(format!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                metadata.len(),
                MAX_PAYLOAD_SIZE
            )));
        }

        let content = fs::read_to_string(&path).map_err(|e| io_error(e.to_string()))?;
        tracing::trace!(path = %path.display(), bytes = content.len(), "read snapshot payload");

        serde_json::from_str(&content).map_err(|e| TransportError::InvalidJson {
            kind,
            id: id.to_string(),
            details: e.to_string(),
        })
    }
}

impl Sw360Transport for SnapshotTransport {
    fn get_release(&self, id: &str) -> Result<Value, TransportError> {
        self.read_payload(ResourceKind::Release, id)
    }

    fn get_component(&self, id: &str) -> Result<Value, TransportError> {
        self.read_payload(ResourceKind::Component, id)
    }

    fn get_project(&self, id: &str) -> Result<Value, TransportError> {
        self.read_payload(ResourceKind::Project, id)
    }

    fn get_attachment(&self, id: &str) -> Result<Value, TransportError> {
        self.read_payload(ResourceKind::Attachment, id)
    }
}

impl ProjectSearch for SnapshotTransport {
    fn find_projects_by_name(&self, name: &str) -> Result<Vec<Value>, TransportError> {
        let kind = ResourceKind::Project;
        let dir = self.root.join(kind.collection());
        let entries = fs::read_dir(&dir).map_err(|e| TransportError::Io {
            kind,
            id: name.to_string(),
            details: format!("Failed to list {}: {}", dir.display(), e),
        })?;

        let mut ids: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                    return None;
                }
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();
        ids.sort();

        let mut matches = Vec::new();
        for id in ids {
            let payload = self.read_payload(kind, &id)?;
            if payload.get("name").and_then(Value::as_str) == Some(name) {
                matches.push(payload);
            }
        }
        tracing::debug!(name, found = matches.len(), "searched projects by name");
        Ok(matches)
    }
}
