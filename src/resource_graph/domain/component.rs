use super::{Attachment, Release, Resource, ResourceBase, ResourceHandle, ResourceKind, ScalarField, Shared};
use std::collections::BTreeMap;
use std::fmt;

const COMPONENT_FIELDS: &[ScalarField<Component>] = &[
    ScalarField {
        json_key: "name",
        get: |c| c.name.as_deref(),
        set: |c, v| c.name = v,
    },
    ScalarField {
        json_key: "description",
        get: |c| c.description.as_deref(),
        set: |c, v| c.description = v,
    },
    ScalarField {
        json_key: "homepage",
        get: |c| c.homepage.as_deref(),
        set: |c, v| c.homepage = v,
    },
    ScalarField {
        json_key: "componentType",
        get: |c| c.component_type.as_deref(),
        set: |c, v| c.component_type = v,
    },
];

/// A software package/library/program tracked in SW360, owning its releases.
#[derive(Debug, Default)]
pub struct Component {
    base: ResourceBase,
    pub name: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
    /// One of `INTERNAL`, `OSS`, `COTS`, `FREESOFTWARE`, `INNER_SOURCE`, `SERVICE`, `CODE_SNIPPET`
    pub component_type: Option<String>,
    pub releases: BTreeMap<String, Shared<Release>>,
    pub attachments: BTreeMap<String, Shared<Attachment>>,
}

impl Component {
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
}

impl Resource for Component {
    const KIND: ResourceKind = ResourceKind::Component;

    fn base(&self) -> &ResourceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase {
        &mut self.base
    }

    fn scalar_fields() -> &'static [ScalarField<Self>] {
        COMPONENT_FIELDS
    }

    fn into_handle(shared: Shared<Self>) -> ResourceHandle {
        ResourceHandle::Component(shared)
    }

    fn from_handle(handle: &ResourceHandle) -> Option<Shared<Self>> {
        match handle {
            ResourceHandle::Component(rc) => Some(rc.clone()),
            _ => None,
        }
    }

    fn releases_mut(&mut self) -> Option<&mut BTreeMap<String, Shared<Release>>> {
        Some(&mut self.releases)
    }

    fn attachments_mut(&mut self) -> Option<&mut BTreeMap<String, Shared<Attachment>>> {
        Some(&mut self.attachments)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.name.as_deref().unwrap_or_default(),
            self.id().unwrap_or_default()
        )
    }
}
