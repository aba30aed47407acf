use super::decoder::Decoder;
use super::registry::Registry;
use crate::ports::outbound::Sw360Transport;
use crate::resource_graph::domain::{
    id_from_href, self_href, Attachment, Component, Project, Release, Resource, ResourceHandle,
    ResourceKind, Shared,
};
use crate::shared::error::ResourceError;
use serde_json::Value;

/// Owns the identity map of one graph-building run.
///
/// Every resource fetched or decoded through the same session is unique per
/// `(kind, id)`. Dropping the session drops every resource no caller still
/// holds; back-references then no longer upgrade.
#[derive(Debug, Default)]
pub struct GraphSession {
    registry: Registry,
}

impl GraphSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the registered instance for `id` or an empty one registered under it.
    pub fn resource<T: Resource>(&mut self, id: &str) -> Result<Shared<T>, ResourceError> {
        self.registry.lookup_or_create(id, T::default)
    }

    /// Registers a resource built by the caller. Fails if another instance
    /// already holds its id.
    pub fn adopt<T: Resource>(&mut self, target: &Shared<T>) -> Result<(), ResourceError> {
        let id = target.borrow().id().map(str::to_string);
        match id {
            Some(id) => self.registry.register(&id, target),
            None => Err(ResourceError::MissingIdentity {
                kind: T::KIND,
                action: "register a resource",
            }),
        }
    }

    /// Decodes a payload into an existing instance, overlaying what it already knows.
    pub fn decode<T: Resource>(
        &mut self,
        target: &Shared<T>,
        payload: &Value,
    ) -> Result<(), ResourceError> {
        Decoder::new(&mut self.registry).decode(target, payload)
    }

    /// Decodes a payload into the registered instance its self link names,
    /// creating it if needed.
    pub fn decode_new<T: Resource>(&mut self, payload: &Value) -> Result<Shared<T>, ResourceError> {
        Decoder::new(&mut self.registry).decode_new(payload)
    }

    /// Fetches `id` through the transport and decodes it into the session's instance.
    pub fn get<T: Resource, S: Sw360Transport + ?Sized>(
        &mut self,
        transport: &S,
        id: &str,
    ) -> Result<Shared<T>, ResourceError> {
        tracing::debug!(kind = %T::KIND, id, "fetching resource");
        let payload = transport.fetch(T::KIND, id)?;
        if let Some(href) = self_href(&payload) {
            let payload_id = id_from_href(href)?;
            if payload_id != id {
                return Err(ResourceError::IdentityMismatch {
                    kind: T::KIND,
                    existing: id.to_string(),
                    requested: payload_id,
                });
            }
        }

        let known = self.registry.contains(T::KIND, id);
        let target = self.resource::<T>(id)?;
        if let Err(e) = self.decode(&target, &payload) {
            // A failed first fetch must not leave an empty instance behind
            if !known {
                self.registry.remove(T::KIND, id);
            }
            return Err(e);
        }
        Ok(target)
    }

    /// Re-fetches an instance by its own id
    pub fn refresh<T: Resource, S: Sw360Transport + ?Sized>(
        &mut self,
        transport: &S,
        target: &Shared<T>,
    ) -> Result<(), ResourceError> {
        let id = target
            .borrow()
            .id()
            .map(str::to_string)
            .ok_or(ResourceError::MissingIdentity {
                kind: T::KIND,
                action: "refresh a resource",
            })?;
        let payload = transport.fetch(T::KIND, &id)?;
        self.decode(target, &payload)
    }

    pub fn release<S: Sw360Transport + ?Sized>(
        &mut self,
        transport: &S,
        id: &str,
    ) -> Result<Shared<Release>, ResourceError> {
        self.get(transport, id)
    }

    pub fn component<S: Sw360Transport + ?Sized>(
        &mut self,
        transport: &S,
        id: &str,
    ) -> Result<Shared<Component>, ResourceError> {
        self.get(transport, id)
    }

    pub fn project<S: Sw360Transport + ?Sized>(
        &mut self,
        transport: &S,
        id: &str,
    ) -> Result<Shared<Project>, ResourceError> {
        self.get(transport, id)
    }

    pub fn attachment<S: Sw360Transport + ?Sized>(
        &mut self,
        transport: &S,
        id: &str,
    ) -> Result<Shared<Attachment>, ResourceError> {
        self.get(transport, id)
    }

    /// Untyped fetch for callers that only know the kind at runtime
    pub fn get_resource<S: Sw360Transport + ?Sized>(
        &mut self,
        kind: ResourceKind,
        transport: &S,
        id: &str,
    ) -> Result<ResourceHandle, ResourceError> {
        Ok(match kind {
            ResourceKind::Project => ResourceHandle::Project(self.project(transport, id)?),
            ResourceKind::Component => ResourceHandle::Component(self.component(transport, id)?),
            ResourceKind::Release => ResourceHandle::Release(self.release(transport, id)?),
            ResourceKind::Attachment => ResourceHandle::Attachment(self.attachment(transport, id)?),
        })
    }

    /// Fetches the parent component of a release into the session's instance.
    ///
    /// The release is refreshed first when its component link is not known yet.
    pub fn release_component<S: Sw360Transport + ?Sized>(
        &mut self,
        transport: &S,
        release: &Shared<Release>,
    ) -> Result<Shared<Component>, ResourceError> {
        if release.borrow().parent().is_none() {
            self.refresh(transport, release)?;
        }

        let parent = release.borrow().parent().cloned();
        let parent = parent.ok_or(ResourceError::MissingIdentity {
            kind: ResourceKind::Component,
            action: "resolve the parent of a release without a component link",
        })?;

        self.component(transport, parent.id())
    }
}
