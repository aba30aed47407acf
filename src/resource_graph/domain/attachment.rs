use super::{Resource, ResourceBase, ResourceHandle, ResourceKind, ResourceLink, ScalarField, Shared};
use std::fmt;

const ATTACHMENT_FIELDS: &[ScalarField<Attachment>] = &[
    ScalarField {
        json_key: "filename",
        get: |a| a.filename.as_deref(),
        set: |a, v| a.filename = v,
    },
    ScalarField {
        json_key: "sha1",
        get: |a| a.sha1.as_deref(),
        set: |a, v| a.sha1 = v,
    },
    ScalarField {
        json_key: "attachmentType",
        get: |a| a.attachment_type.as_deref(),
        set: |a, v| a.attachment_type = v,
    },
    ScalarField {
        json_key: "createdBy",
        get: |a| a.created_by.as_deref(),
        set: |a, v| a.created_by = v,
    },
    ScalarField {
        json_key: "createdTeam",
        get: |a| a.created_team.as_deref(),
        set: |a, v| a.created_team = v,
    },
    ScalarField {
        json_key: "createdComment",
        get: |a| a.created_comment.as_deref(),
        set: |a, v| a.created_comment = v,
    },
    ScalarField {
        json_key: "createdOn",
        get: |a| a.created_on.as_deref(),
        set: |a, v| a.created_on = v,
    },
    ScalarField {
        json_key: "checkedBy",
        get: |a| a.checked_by.as_deref(),
        set: |a, v| a.checked_by = v,
    },
    ScalarField {
        json_key: "checkedTeam",
        get: |a| a.checked_team.as_deref(),
        set: |a, v| a.checked_team = v,
    },
    ScalarField {
        json_key: "checkedComment",
        get: |a| a.checked_comment.as_deref(),
        set: |a, v| a.checked_comment = v,
    },
    ScalarField {
        json_key: "checkedOn",
        get: |a| a.checked_on.as_deref(),
        set: |a, v| a.checked_on = v,
    },
    ScalarField {
        json_key: "checkStatus",
        get: |a| a.check_status.as_deref(),
        set: |a, v| a.check_status = v,
    },
];

/// Attachment type of upstream source archives
pub const SOURCE_ATTACHMENT_TYPE: &str = "SOURCE";

/// A file stored in SW360: sources, clearing reports, CLI files and so on.
#[derive(Debug, Default)]
pub struct Attachment {
    base: ResourceBase,
    pub filename: Option<String>,
    pub sha1: Option<String>,
    /// `DOCUMENT`, `SOURCE`, `SOURCE_SELF`, `CLEARING_REPORT`, `COMPONENT_LICENSE_INFO_XML`, ...
    pub attachment_type: Option<String>,
    pub created_by: Option<String>,
    pub created_team: Option<String>,
    pub created_comment: Option<String>,
    pub created_on: Option<String>,
    pub checked_by: Option<String>,
    pub checked_team: Option<String>,
    pub checked_comment: Option<String>,
    pub checked_on: Option<String>,
    pub check_status: Option<String>,
    pub download_link: Option<String>,
    pub(crate) parent: Option<ResourceLink>,
}

impl Attachment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            base: ResourceBase::with_id(id),
            ..Self::default()
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// The release, component or project this attachment was fetched under
    pub fn parent(&self) -> Option<&ResourceLink> {
        self.parent.as_ref()
    }

    pub fn is_source(&self) -> bool {
        self.attachment_type.as_deref() == Some(SOURCE_ATTACHMENT_TYPE)
    }
}

impl Resource for Attachment {
    const KIND: ResourceKind = ResourceKind::Attachment;

    fn base(&self) -> &ResourceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase {
        &mut self.base
    }

    fn scalar_fields() -> &'static [ScalarField<Self>] {
        ATTACHMENT_FIELDS
    }

    fn into_handle(shared: Shared<Self>) -> ResourceHandle {
        ResourceHandle::Attachment(shared)
    }

    fn from_handle(handle: &ResourceHandle) -> Option<Shared<Self>> {
        match handle {
            ResourceHandle::Attachment(rc) => Some(rc.clone()),
            _ => None,
        }
    }

    fn download_link_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.download_link)
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.filename.as_deref().unwrap_or_default(),
            self.id().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_display() {
        let attachment = Attachment::with_id("a1").with_filename("acl-2.2.tar.gz");
        assert_eq!(attachment.to_string(), "acl-2.2.tar.gz (a1)");
    }

    #[test]
    fn test_audit_field_names() {
        let names: Vec<String> = Attachment::new()
            .attributes()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert!(names.contains(&"attachment_type".to_string()));
        assert!(names.contains(&"checked_comment".to_string()));
        assert!(names.contains(&"check_status".to_string()));
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_is_source() {
        let mut attachment = Attachment::new();
        assert!(!attachment.is_source());
        attachment.attachment_type = Some("SOURCE".to_string());
        assert!(attachment.is_source());
        attachment.attachment_type = Some("SOURCE_SELF".to_string());
        assert!(!attachment.is_source());
    }
}
