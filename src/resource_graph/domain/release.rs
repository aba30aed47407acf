use super::{
    Attachment, Component, Link, Resource, ResourceBase, ResourceHandle, ResourceKind,
    ResourceLink, ScalarField, Shared,
};
use std::collections::BTreeMap;
use std::fmt;

const RELEASE_FIELDS: &[ScalarField<Release>] = &[
    ScalarField {
        json_key: "name",
        get: |r| r.name.as_deref(),
        set: |r, v| r.name = v,
    },
    ScalarField {
        json_key: "version",
        get: |r| r.version.as_deref(),
        set: |r, v| r.version = v,
    },
    ScalarField {
        json_key: "downloadurl",
        get: |r| r.downloadurl.as_deref(),
        set: |r, v| r.downloadurl = v,
    },
];

/// A single version of a component.
///
/// `parent` stays unset when the release was only reached through a project;
/// in that case the referencing projects are recorded in `users`.
#[derive(Debug, Default)]
pub struct Release {
    base: ResourceBase,
    pub name: Option<String>,
    pub version: Option<String>,
    pub downloadurl: Option<String>,
    pub attachments: BTreeMap<String, Shared<Attachment>>,
    pub(crate) parent: Option<Link<Component>>,
    pub(crate) users: BTreeMap<String, ResourceLink>,
}

impl Release {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            base: ResourceBase::with_id(id),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn parent(&self) -> Option<&Link<Component>> {
        self.parent.as_ref()
    }

    pub fn users(&self) -> &BTreeMap<String, ResourceLink> {
        &self.users
    }
}

impl Resource for Release {
    const KIND: ResourceKind = ResourceKind::Release;

    fn base(&self) -> &ResourceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase {
        &mut self.base
    }

    fn scalar_fields() -> &'static [ScalarField<Self>] {
        RELEASE_FIELDS
    }

    fn into_handle(shared: Shared<Self>) -> ResourceHandle {
        ResourceHandle::Release(shared)
    }

    fn from_handle(handle: &ResourceHandle) -> Option<Shared<Self>> {
        match handle {
            ResourceHandle::Release(rc) => Some(rc.clone()),
            _ => None,
        }
    }

    fn attachments_mut(&mut self) -> Option<&mut BTreeMap<String, Shared<Attachment>>> {
        Some(&mut self.attachments)
    }

    fn component_parent_mut(&mut self) -> Option<&mut Option<Link<Component>>> {
        Some(&mut self.parent)
    }

    fn users_mut(&mut self) -> Option<&mut BTreeMap<String, ResourceLink>> {
        Some(&mut self.users)
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.name.as_deref().unwrap_or_default(),
            self.version.as_deref().unwrap_or_default(),
            self.id().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_display() {
        let release = Release::with_id("123")
            .with_name("TestCmp")
            .with_version("1.4");
        assert_eq!(release.to_string(), "TestCmp 1.4 (123)");
    }

    #[test]
    fn test_bare_release() {
        let release = Release::new();
        assert!(release.id().is_none());
        assert!(release.name.is_none());
        assert!(release.parent().is_none());
        assert!(release.users().is_empty());
    }

    #[test]
    fn test_release_attributes() {
        let release = Release::new().with_name("acl");
        let attributes = release.attributes();
        assert_eq!(attributes.len(), 3);
        assert_eq!(attributes[0], ("name".to_string(), Some("acl")));
        assert_eq!(attributes[2], ("downloadurl".to_string(), None));
    }
}
