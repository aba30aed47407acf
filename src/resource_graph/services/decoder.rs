//! HAL payload decoder shared by all resource types.
//!
//! Scalar members go through the type's field table, `externalIds` through
//! the package-URL normalizer, and `_links`/`_embedded` sub-keys through the
//! relation dispatch below. Everything else lands in `details` verbatim.

use super::external_ids::normalize_external_ids;
use super::registry::Registry;
use crate::resource_graph::domain::link::set_link_once;
use crate::resource_graph::domain::resource::{insert_user, scalar_text, set_parent_once};
use crate::resource_graph::domain::{
    id_from_href, link_href, self_href, Attachment, Component, Link, Project, Release, Resource,
    ResourceHandle, ResourceKind, ResourceLink, Shared,
};
use crate::shared::error::ResourceError;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::rc::Rc;

const LINKS: &str = "_links";
const EMBEDDED: &str = "_embedded";
const EXTERNAL_IDS: &str = "externalIds";

/// Relations understood inside `_links` and `_embedded`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    SelfLink,
    Component,
    DownloadLink,
    Attachments,
    Releases,
    Projects,
}

impl Relation {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "self" => Some(Relation::SelfLink),
            "sw360:component" => Some(Relation::Component),
            "sw360:downloadLink" => Some(Relation::DownloadLink),
            "sw360:attachments" => Some(Relation::Attachments),
            "sw360:releases" => Some(Relation::Releases),
            "sw360:projects" => Some(Relation::Projects),
            _ => None,
        }
    }
}

/// Applies payloads to resources, creating and linking related resources
/// through the registry.
pub struct Decoder<'a> {
    registry: &'a mut Registry,
}

impl<'a> Decoder<'a> {
    pub fn new(registry: &'a mut Registry) -> Self {
        Self { registry }
    }

    /// Decodes `payload` into `target`.
    ///
    /// The id is resolved from `_links.self` before anything else so that
    /// embedded relations can be keyed by it, and the target is registered as
    /// soon as its id is known.
    pub fn decode<T: Resource>(
        &mut self,
        target: &Shared<T>,
        payload: &Value,
    ) -> Result<(), ResourceError> {
        let object = payload
            .as_object()
            .ok_or_else(|| ResourceError::UnexpectedPayload {
                kind: T::KIND,
                details: format!("expected a JSON object, got {}", json_type(payload)),
            })?;

        let mut guard = target
            .try_borrow_mut()
            .map_err(|_| ResourceError::CyclicEmbedding {
                kind: T::KIND,
                id: self_href(payload)
                    .and_then(|href| id_from_href(href).ok())
                    .unwrap_or_else(|| "?".to_string()),
            })?;
        let this: &mut T = &mut guard;

        if let Some(href) = self_href(payload) {
            this.base_mut().set_id(T::KIND, &id_from_href(href)?)?;
        }
        if let Some(id) = this.id().map(str::to_string) {
            self.registry.register(&id, target)?;
        }

        let mut external_ids = None;
        for (key, value) in object {
            if let Some(field) = T::scalar_fields().iter().find(|f| f.json_key == key) {
                tracing::trace!(kind = %T::KIND, attribute = %field.attribute(), "assign");
                (field.set)(this, scalar_text(value));
                continue;
            }

            match key.as_str() {
                EXTERNAL_IDS => external_ids = Some(value),
                LINKS | EMBEDDED => match value.as_object() {
                    Some(section) => {
                        for (sub_key, sub_value) in section {
                            if !self.apply_relation(target, this, sub_key, sub_value)? {
                                store_section_detail(this, key, sub_key, sub_value);
                            }
                        }
                    }
                    None => {
                        this.base_mut().details.insert(key.clone(), value.clone());
                    }
                },
                _ => {
                    this.base_mut().details.insert(key.clone(), value.clone());
                }
            }
        }

        // Normalizer runs last and recomputes both partitions from this payload only
        if let Some(raw) = external_ids {
            apply_external_ids(this, raw);
        }

        Ok(())
    }

    /// Decodes a payload into the registered instance named by its self link,
    /// or into a fresh unregistered instance when the payload carries none.
    pub fn decode_new<T: Resource>(&mut self, payload: &Value) -> Result<Shared<T>, ResourceError> {
        let target = match self_href(payload) {
            Some(href) => {
                let id = id_from_href(href)?;
                self.registry.lookup_or_create(&id, T::default)?
            }
            None => Rc::new(RefCell::new(T::default())),
        };
        self.decode(&target, payload)?;
        Ok(target)
    }

    /// Returns `false` when the relation is unknown or not supported by `T`,
    /// in which case the caller keeps it in `details`.
    fn apply_relation<T: Resource>(
        &mut self,
        target: &Shared<T>,
        this: &mut T,
        sub_key: &str,
        value: &Value,
    ) -> Result<bool, ResourceError> {
        let Some(relation) = Relation::from_key(sub_key) else {
            return Ok(false);
        };

        match relation {
            Relation::SelfLink => {
                let Some(href) = link_href(value) else {
                    return Ok(false);
                };
                this.base_mut().set_id(T::KIND, &id_from_href(href)?)?;
                Ok(true)
            }
            Relation::Component => {
                let Some(slot) = this.component_parent_mut() else {
                    return Ok(false);
                };
                let href = link_href(value).or_else(|| self_href(value)).ok_or_else(|| {
                    ResourceError::MalformedReference {
                        href: value.to_string(),
                    }
                })?;
                let component_id = id_from_href(href)?;
                let component = self
                    .registry
                    .lookup_or_create(&component_id, Component::default)?;
                tracing::debug!(kind = %T::KIND, component = %component_id, "linking parent component");
                set_link_once(T::KIND, slot, Link::new(&component_id, &component))?;
                Ok(true)
            }
            Relation::DownloadLink => {
                let Some(slot) = this.download_link_mut() else {
                    return Ok(false);
                };
                match link_href(value) {
                    Some(href) => {
                        *slot = Some(href.to_string());
                        Ok(true)
                    }
                    None => Ok(false),
                }
            }
            Relation::Attachments => {
                if this.attachments_mut().is_none() {
                    return Ok(false);
                }
                let owner_id = required_id(this, "link attachments")?;
                let owner = T::into_handle(target.clone());
                for item in embedded_items(value) {
                    let attachment: Shared<Attachment> = self.decode_embedded(item)?;
                    let attachment_id = id_of(&attachment);
                    set_parent_once(
                        ResourceKind::Attachment,
                        &mut attachment.borrow_mut().parent,
                        owner.downgrade(&owner_id),
                    )?;
                    if let Some(attachments) = this.attachments_mut() {
                        attachments.insert(attachment_id, attachment);
                    }
                }
                Ok(true)
            }
            Relation::Releases => {
                if this.releases_mut().is_none() {
                    return Ok(false);
                }
                let owner_id = required_id(this, "link releases")?;
                let owner = T::into_handle(target.clone());
                for item in embedded_items(value) {
                    let release: Shared<Release> = self.decode_embedded(item)?;
                    let release_id = id_of(&release);
                    match &owner {
                        ResourceHandle::Component(component) => set_link_once(
                            ResourceKind::Release,
                            &mut release.borrow_mut().parent,
                            Link::new(&owner_id, component),
                        )?,
                        _ => add_user(&release, owner.downgrade(&owner_id))?,
                    }
                    if let Some(releases) = this.releases_mut() {
                        releases.insert(release_id, release);
                    }
                }
                Ok(true)
            }
            Relation::Projects => {
                if this.projects_mut().is_none() {
                    return Ok(false);
                }
                let owner_id = required_id(this, "link projects")?;
                let owner = T::into_handle(target.clone());
                for item in embedded_items(value) {
                    let project: Shared<Project> = self.decode_embedded(item)?;
                    let project_id = id_of(&project);
                    add_user(&project, owner.downgrade(&owner_id))?;
                    if let Some(projects) = this.projects_mut() {
                        projects.insert(project_id, project);
                    }
                }
                Ok(true)
            }
        }
    }

    /// Embedded objects must carry their own self link: it is the only source of their id.
    fn decode_embedded<C: Resource>(&mut self, item: &Value) -> Result<Shared<C>, ResourceError> {
        let href = self_href(item).ok_or(ResourceError::MissingIdentity {
            kind: C::KIND,
            action: "link an embedded resource without a self link",
        })?;
        let id = id_from_href(href)?;
        let child = self.registry.lookup_or_create(&id, C::default)?;
        self.decode(&child, item)?;
        Ok(child)
    }
}

fn required_id<T: Resource>(this: &T, action: &'static str) -> Result<String, ResourceError> {
    this.id()
        .map(str::to_string)
        .ok_or(ResourceError::MissingIdentity {
            kind: T::KIND,
            action,
        })
}

/// Records `user` in the child's users map; kinds without one ignore it.
fn add_user<C: Resource>(child: &Shared<C>, user: ResourceLink) -> Result<(), ResourceError> {
    let mut child_mut = child.borrow_mut();
    match child_mut.users_mut() {
        Some(users) => insert_user(C::KIND, users, user),
        None => Ok(()),
    }
}

fn id_of<C: Resource>(child: &Shared<C>) -> String {
    child.borrow().id().unwrap_or_default().to_string()
}

/// A relation value is either a list of objects or a single object
fn embedded_items(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![value],
        _ => Vec::new(),
    }
}

fn store_section_detail<T: Resource>(this: &mut T, section: &str, sub_key: &str, value: &Value) {
    let entry = this
        .base_mut()
        .details
        .entry(section.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    if let Value::Object(map) = entry {
        map.insert(sub_key.to_string(), value.clone());
    }
}

fn apply_external_ids<T: Resource>(this: &mut T, raw: &Value) {
    let empty = Map::new();
    let map = match raw {
        Value::Object(map) => map,
        Value::Null => &empty,
        other => {
            tracing::warn!(kind = %T::KIND, "externalIds is not an object, keeping it in details");
            this.base_mut()
                .details
                .insert(EXTERNAL_IDS.to_string(), other.clone());
            return;
        }
    };
    let partition = normalize_external_ids(map);
    let base = this.base_mut();
    base.external_ids = partition.external_ids;
    base.purls = partition.purls;
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
