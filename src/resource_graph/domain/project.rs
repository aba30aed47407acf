use super::{
    Attachment, Release, Resource, ResourceBase, ResourceHandle, ResourceKind, ResourceLink,
    ScalarField, Shared,
};
use std::collections::BTreeMap;
use std::fmt;

const PROJECT_FIELDS: &[ScalarField<Project>] = &[
    ScalarField {
        json_key: "name",
        get: |p| p.name.as_deref(),
        set: |p, v| p.name = v,
    },
    ScalarField {
        json_key: "description",
        get: |p| p.description.as_deref(),
        set: |p, v| p.description = v,
    },
    ScalarField {
        json_key: "version",
        get: |p| p.version.as_deref(),
        set: |p, v| p.version = v,
    },
    ScalarField {
        json_key: "visibility",
        get: |p| p.visibility.as_deref(),
        set: |p, v| p.visibility = v,
    },
    ScalarField {
        json_key: "projectType",
        get: |p| p.project_type.as_deref(),
        set: |p, v| p.project_type = v,
    },
];

/// A collection of releases used in a product, possibly linking sub-projects.
#[derive(Debug, Default)]
pub struct Project {
    base: ResourceBase,
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    /// One of `PRIVATE`, `ME_AND_MODERATORS`, `BUISNESSUNIT_AND_MODERATORS`, `EVERYONE`
    pub visibility: Option<String>,
    /// One of `CUSTOMER`, `INTERNAL`, `PRODUCT`, `SERVICE`, `INNER_SOURCE`
    pub project_type: Option<String>,
    pub releases: BTreeMap<String, Shared<Release>>,
    pub projects: BTreeMap<String, Shared<Project>>,
    pub attachments: BTreeMap<String, Shared<Attachment>>,
    pub(crate) users: BTreeMap<String, ResourceLink>,
}

impl Project {
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

    /// Projects (or other resources) this project is linked from
    pub fn users(&self) -> &BTreeMap<String, ResourceLink> {
        &self.users
    }
}

impl Resource for Project {
    const KIND: ResourceKind = ResourceKind::Project;

    fn base(&self) -> &ResourceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase {
        &mut self.base
    }

    fn scalar_fields() -> &'static [ScalarField<Self>] {
        PROJECT_FIELDS
    }

    fn into_handle(shared: Shared<Self>) -> ResourceHandle {
        ResourceHandle::Project(shared)
    }

    fn from_handle(handle: &ResourceHandle) -> Option<Shared<Self>> {
        match handle {
            ResourceHandle::Project(rc) => Some(rc.clone()),
            _ => None,
        }
    }

    fn releases_mut(&mut self) -> Option<&mut BTreeMap<String, Shared<Release>>> {
        Some(&mut self.releases)
    }

    fn attachments_mut(&mut self) -> Option<&mut BTreeMap<String, Shared<Attachment>>> {
        Some(&mut self.attachments)
    }

    fn projects_mut(&mut self) -> Option<&mut BTreeMap<String, Shared<Project>>> {
        Some(&mut self.projects)
    }

    fn users_mut(&mut self) -> Option<&mut BTreeMap<String, ResourceLink>> {
        Some(&mut self.users)
    }
}

impl fmt::Display for Project {
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
