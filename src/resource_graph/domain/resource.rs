use super::{Attachment, Component, Link, Project, Purl, Release};
use crate::shared::casing::to_snake_case;
use crate::shared::error::ResourceError;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;

/// Shared, interior-mutable handle to a resource held by the registry.
pub type Shared<T> = Rc<RefCell<T>>;

/// Type tag of an SW360 resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Project,
    Component,
    Release,
    Attachment,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Project => "project",
            ResourceKind::Component => "component",
            ResourceKind::Release => "release",
            ResourceKind::Attachment => "attachment",
        }
    }

    /// Collection segment used in REST paths (`.../resource/api/releases/<id>`)
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Project => "projects",
            ResourceKind::Component => "components",
            ResourceKind::Release => "releases",
            ResourceKind::Attachment => "attachments",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State common to every SW360 resource.
#[derive(Debug, Clone, Default)]
pub struct ResourceBase {
    id: Option<String>,
    /// Every JSON member not covered by a field table or a known relation,
    /// stored with the names and shapes used by the REST API.
    pub details: Map<String, Value>,
    /// External ids that are not package URLs, values kept verbatim.
    pub external_ids: BTreeMap<String, Value>,
    pub purls: BTreeSet<Purl>,
}

impl ResourceBase {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the id once. Re-assigning the same id is a no-op, a different one fails.
    pub fn set_id(&mut self, kind: ResourceKind, id: &str) -> Result<(), ResourceError> {
        match &self.id {
            None => {
                self.id = Some(id.to_string());
                Ok(())
            }
            Some(existing) if existing == id => Ok(()),
            Some(existing) => Err(ResourceError::IdentityMismatch {
                kind,
                existing: existing.clone(),
                requested: id.to_string(),
            }),
        }
    }
}

/// Entry of a per-type scalar field table: JSON member name plus accessors.
pub struct ScalarField<T> {
    pub json_key: &'static str,
    pub get: fn(&T) -> Option<&str>,
    pub set: fn(&mut T, Option<String>),
}

impl<T> ScalarField<T> {
    /// Rust attribute name of the field (`attachmentType` -> `attachment_type`)
    pub fn attribute(&self) -> String {
        to_snake_case(self.json_key)
    }
}

/// Behaviour shared by the four resource types.
///
/// Relation slots default to `None`; a type that returns `Some` for a slot
/// accepts the matching `_links`/`_embedded` relation, every other type keeps
/// the relation verbatim in `details`.
pub trait Resource: Sized + Default + 'static {
    const KIND: ResourceKind;

    fn base(&self) -> &ResourceBase;
    fn base_mut(&mut self) -> &mut ResourceBase;

    /// Allow-list of scalar JSON members decoded into typed attributes
    fn scalar_fields() -> &'static [ScalarField<Self>];

    fn into_handle(shared: Shared<Self>) -> ResourceHandle;
    fn from_handle(handle: &ResourceHandle) -> Option<Shared<Self>>;

    fn id(&self) -> Option<&str> {
        self.base().id()
    }

    /// Snake-case attribute names with their current values
    fn attributes(&self) -> Vec<(String, Option<&str>)> {
        Self::scalar_fields()
            .iter()
            .map(|field| (field.attribute(), (field.get)(self)))
            .collect()
    }

    fn releases_mut(&mut self) -> Option<&mut BTreeMap<String, Shared<Release>>> {
        None
    }

    fn attachments_mut(&mut self) -> Option<&mut BTreeMap<String, Shared<Attachment>>> {
        None
    }

    fn projects_mut(&mut self) -> Option<&mut BTreeMap<String, Shared<Project>>> {
        None
    }

    fn component_parent_mut(&mut self) -> Option<&mut Option<Link<Component>>> {
        None
    }

    fn download_link_mut(&mut self) -> Option<&mut Option<String>> {
        None
    }

    /// Back-reference map for resources that can be linked from others
    fn users_mut(&mut self) -> Option<&mut BTreeMap<String, ResourceLink>> {
        None
    }
}

/// Strong, type-erased handle as stored in the registry.
#[derive(Debug, Clone)]
pub enum ResourceHandle {
    Project(Shared<Project>),
    Component(Shared<Component>),
    Release(Shared<Release>),
    Attachment(Shared<Attachment>),
}

impl ResourceHandle {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceHandle::Project(_) => ResourceKind::Project,
            ResourceHandle::Component(_) => ResourceKind::Component,
            ResourceHandle::Release(_) => ResourceKind::Release,
            ResourceHandle::Attachment(_) => ResourceKind::Attachment,
        }
    }

    /// True when both handles point at the very same instance
    pub fn same_instance(&self, other: &ResourceHandle) -> bool {
        match (self, other) {
            (ResourceHandle::Project(a), ResourceHandle::Project(b)) => Rc::ptr_eq(a, b),
            (ResourceHandle::Component(a), ResourceHandle::Component(b)) => Rc::ptr_eq(a, b),
            (ResourceHandle::Release(a), ResourceHandle::Release(b)) => Rc::ptr_eq(a, b),
            (ResourceHandle::Attachment(a), ResourceHandle::Attachment(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Creates a non-owning link to this resource under the given id
    pub fn downgrade(&self, id: &str) -> ResourceLink {
        match self {
            ResourceHandle::Project(rc) => ResourceLink::Project(Link::new(id, rc)),
            ResourceHandle::Component(rc) => ResourceLink::Component(Link::new(id, rc)),
            ResourceHandle::Release(rc) => ResourceLink::Release(Link::new(id, rc)),
            ResourceHandle::Attachment(rc) => ResourceLink::Attachment(Link::new(id, rc)),
        }
    }
}

/// Type-erased non-owning reference, used for `parent` of attachments and `users`.
#[derive(Debug, Clone)]
pub enum ResourceLink {
    Project(Link<Project>),
    Component(Link<Component>),
    Release(Link<Release>),
    Attachment(Link<Attachment>),
}

impl ResourceLink {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceLink::Project(_) => ResourceKind::Project,
            ResourceLink::Component(_) => ResourceKind::Component,
            ResourceLink::Release(_) => ResourceKind::Release,
            ResourceLink::Attachment(_) => ResourceKind::Attachment,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ResourceLink::Project(link) => link.id(),
            ResourceLink::Component(link) => link.id(),
            ResourceLink::Release(link) => link.id(),
            ResourceLink::Attachment(link) => link.id(),
        }
    }

    pub fn upgrade(&self) -> Option<ResourceHandle> {
        match self {
            ResourceLink::Project(link) => link.upgrade().map(ResourceHandle::Project),
            ResourceLink::Component(link) => link.upgrade().map(ResourceHandle::Component),
            ResourceLink::Release(link) => link.upgrade().map(ResourceHandle::Release),
            ResourceLink::Attachment(link) => link.upgrade().map(ResourceHandle::Attachment),
        }
    }

    pub fn points_to(&self, other: &ResourceLink) -> bool {
        match (self, other) {
            (ResourceLink::Project(a), ResourceLink::Project(b)) => a.points_to(b),
            (ResourceLink::Component(a), ResourceLink::Component(b)) => a.points_to(b),
            (ResourceLink::Release(a), ResourceLink::Release(b)) => a.points_to(b),
            (ResourceLink::Attachment(a), ResourceLink::Attachment(b)) => a.points_to(b),
            _ => false,
        }
    }

    fn describe(&self) -> String {
        format!("{} '{}'", self.kind(), self.id())
    }
}

/// Sets a set-once back-reference. Re-targeting to another instance is an integrity violation.
pub(crate) fn set_parent_once(
    kind: ResourceKind,
    slot: &mut Option<ResourceLink>,
    parent: ResourceLink,
) -> Result<(), ResourceError> {
    match slot {
        Some(existing) if existing.points_to(&parent) => Ok(()),
        Some(existing) => Err(ResourceError::IdentityMismatch {
            kind,
            existing: format!("parent {}", existing.describe()),
            requested: format!("parent {}", parent.describe()),
        }),
        None => {
            *slot = Some(parent);
            Ok(())
        }
    }
}

/// Merges one user into a users map. Same key with a different target fails.
pub(crate) fn insert_user(
    kind: ResourceKind,
    users: &mut BTreeMap<String, ResourceLink>,
    user: ResourceLink,
) -> Result<(), ResourceError> {
    match users.get(user.id()) {
        Some(existing) if existing.points_to(&user) => Ok(()),
        Some(existing) => Err(ResourceError::IdentityMismatch {
            kind,
            existing: format!("user {}", existing.describe()),
            requested: format!("user {}", user.describe()),
        }),
        None => {
            users.insert(user.id().to_string(), user);
            Ok(())
        }
    }
}

/// Converts a JSON scalar into the string stored in a typed attribute.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
