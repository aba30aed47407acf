use crate::resource_graph::domain::{Resource, ResourceHandle, ResourceKind, Shared};
use crate::shared::error::ResourceError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Registry key: type tag plus SW360 id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey {
    pub kind: ResourceKind,
    pub id: String,
}

impl ResourceKey {
    pub fn new(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// Identity map guaranteeing at most one live instance per `(kind, id)`.
///
/// The registry holds the only strong references besides forward relations
/// (`releases`, `attachments`, `projects`); back-references are weak.
/// Not synchronized: one registry belongs to one thread of execution.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<ResourceKey, ResourceHandle>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `instance` under `id`.
    ///
    /// Registering the already-registered instance again is a no-op;
    /// a *different* instance under the same key fails with `DuplicateResource`.
    pub fn register<T: Resource>(
        &mut self,
        id: &str,
        instance: &Shared<T>,
    ) -> Result<(), ResourceError> {
        let key = ResourceKey::new(T::KIND, id);
        let handle = T::into_handle(instance.clone());
        match self.entries.get(&key) {
            Some(existing) if existing.same_instance(&handle) => Ok(()),
            Some(_) => Err(ResourceError::DuplicateResource {
                kind: T::KIND,
                id: id.to_string(),
            }),
            None => {
                tracing::debug!(kind = %T::KIND, id, "registered resource");
                self.entries.insert(key, handle);
                Ok(())
            }
        }
    }

    /// Returns the registered instance for `id`, or builds one with `factory`,
    /// stamps it with `id` and registers it.
    pub fn lookup_or_create<T, F>(&mut self, id: &str, factory: F) -> Result<Shared<T>, ResourceError>
    where
        T: Resource,
        F: FnOnce() -> T,
    {
        if let Some(existing) = self.get::<T>(id) {
            return Ok(existing);
        }

        let mut resource = factory();
        resource.base_mut().set_id(T::KIND, id)?;
        let shared = Rc::new(RefCell::new(resource));
        self.register(id, &shared)?;
        Ok(shared)
    }

    pub fn get<T: Resource>(&self, id: &str) -> Option<Shared<T>> {
        self.entries
            .get(&ResourceKey::new(T::KIND, id))
            .and_then(T::from_handle)
    }

    pub fn get_handle(&self, kind: ResourceKind, id: &str) -> Option<&ResourceHandle> {
        self.entries.get(&ResourceKey::new(kind, id))
    }

    pub fn contains(&self, kind: ResourceKind, id: &str) -> bool {
        self.entries.contains_key(&ResourceKey::new(kind, id))
    }

    /// Drops the registry's handle for `(kind, id)`; used to roll back a failed fetch.
    pub(crate) fn remove(&mut self, kind: ResourceKind, id: &str) -> Option<ResourceHandle> {
        let removed = self.entries.remove(&ResourceKey::new(kind, id));
        if removed.is_some() {
            tracing::debug!(kind = %kind, id, "unregistered resource");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registered resources of one kind
    pub fn count(&self, kind: ResourceKind) -> usize {
        self.entries.keys().filter(|key| key.kind == kind).count()
    }

    /// Registered keys in stable (kind, id) order
    pub fn keys(&self) -> Vec<&ResourceKey> {
        let mut keys: Vec<&ResourceKey> = self.entries.keys().collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource_graph::domain::{Component, Release};

    #[test]
    fn test_lookup_or_create_returns_same_instance() {
        let mut registry = Registry::new();
        let first = registry
            .lookup_or_create("7c4", Release::new)
            .unwrap();
        let second = registry
            .lookup_or_create("7c4", || Release::new().with_name("ignored"))
            .unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
        assert_eq!(first.borrow().id(), Some("7c4"));
        // Factory is not invoked for an existing entry
        assert!(second.borrow().name.is_none());
    }

    #[test]
    fn test_same_id_different_kinds_are_distinct() {
        let mut registry = Registry::new();
        registry.lookup_or_create::<Release, _>("1", Release::new).unwrap();
        registry.lookup_or_create::<Component, _>("1", Component::new).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.count(ResourceKind::Release), 1);
        assert_eq!(registry.count(ResourceKind::Component), 1);
    }

    #[test]
    fn test_register_same_instance_twice() {
        let mut registry = Registry::new();
        let release = Rc::new(RefCell::new(Release::with_id("r1")));
        registry.register("r1", &release).unwrap();
        registry.register("r1", &release).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_duplicate_instance_fails() {
        let mut registry = Registry::new();
        let original = Rc::new(RefCell::new(Release::with_id("r1")));
        let impostor = Rc::new(RefCell::new(Release::with_id("r1")));
        registry.register("r1", &original).unwrap();

        let err = registry.register("r1", &impostor).unwrap_err();
        assert!(matches!(
            err,
            ResourceError::DuplicateResource { kind: ResourceKind::Release, .. }
        ));
        assert!(Rc::ptr_eq(&registry.get::<Release>("r1").unwrap(), &original));
    }

    #[test]
    fn test_lookup_or_create_factory_with_conflicting_id() {
        let mut registry = Registry::new();
        let result = registry.lookup_or_create("r1", || Release::with_id("other"));
        assert!(matches!(
            result,
            Err(ResourceError::IdentityMismatch { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_keys_sorted() {
        let mut registry = Registry::new();
        registry.lookup_or_create::<Release, _>("b", Release::new).unwrap();
        registry.lookup_or_create::<Release, _>("a", Release::new).unwrap();
        registry.lookup_or_create::<Component, _>("z", Component::new).unwrap();

        let ids: Vec<&str> = registry.keys().iter().map(|k| k.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "b"]);
        assert!(registry.contains(ResourceKind::Component, "z"));
        assert!(registry.get_handle(ResourceKind::Project, "z").is_none());
    }
}
