use super::{ResourceKind, Shared};
use crate::shared::error::ResourceError;
use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Non-owning, typed reference to a registered resource.
///
/// The id is kept alongside the weak pointer so a link can be reported
/// without borrowing (or even reaching) its target.
pub struct Link<T> {
    id: String,
    target: Weak<RefCell<T>>,
}

impl<T> Link<T> {
    pub fn new(id: &str, target: &Shared<T>) -> Self {
        Self {
            id: id.to_string(),
            target: Rc::downgrade(target),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the target while its session is alive
    pub fn upgrade(&self) -> Option<Shared<T>> {
        self.target.upgrade()
    }

    pub fn points_to(&self, other: &Link<T>) -> bool {
        Weak::ptr_eq(&self.target, &other.target)
    }

    pub fn is(&self, target: &Shared<T>) -> bool {
        std::ptr::eq(self.target.as_ptr(), Rc::as_ptr(target))
    }
}

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            target: self.target.clone(),
        }
    }
}

impl<T> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Link").field(&self.id).finish()
    }
}

/// Sets a typed set-once link; a different target under an existing link fails.
pub(crate) fn set_link_once<T>(
    kind: ResourceKind,
    slot: &mut Option<Link<T>>,
    link: Link<T>,
) -> Result<(), ResourceError> {
    match slot {
        Some(existing) if existing.points_to(&link) => Ok(()),
        Some(existing) => Err(ResourceError::IdentityMismatch {
            kind,
            existing: format!("parent '{}'", existing.id()),
            requested: format!("parent '{}'", link.id()),
        }),
        None => {
            *slot = Some(link);
            Ok(())
        }
    }
}

/// Extracts the resource id from the trailing path segment of a HAL href.
///
/// `https://host/resource/api/releases/7c4` -> `7c4`. Query strings and
/// fragments are not part of the id. An href without a `/` or with an empty
/// trailing segment is malformed.
pub fn id_from_href(href: &str) -> Result<String, ResourceError> {
    let path = href
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    match path.rsplit_once('/') {
        Some((_, id)) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(ResourceError::MalformedReference {
            href: href.to_string(),
        }),
    }
}

/// Reads the `href` of a HAL link object (`{"href": "..."}`).
pub fn link_href(link: &Value) -> Option<&str> {
    link.get("href").and_then(Value::as_str)
}

/// Reads `_links.self.href` of an embedded resource object.
pub fn self_href(resource: &Value) -> Option<&str> {
    resource
        .get("_links")
        .and_then(|links| links.get("self"))
        .and_then(link_href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_from_href() {
        assert_eq!(
            id_from_href("https://sw360.siemens.com/resource/api/releases/7c4").unwrap(),
            "7c4"
        );
        assert_eq!(id_from_href("releases/abc?page=1").unwrap(), "abc");
    }

    #[test]
    fn test_id_from_href_malformed() {
        assert!(matches!(
            id_from_href("https://sw360/resource/api/releases/"),
            Err(ResourceError::MalformedReference { .. })
        ));
        assert!(id_from_href("no-slashes").is_err());
        assert!(id_from_href("").is_err());
    }

    #[test]
    fn test_self_href() {
        let value = json!({"_links": {"self": {"href": "https://x/projects/p1"}}});
        assert_eq!(self_href(&value), Some("https://x/projects/p1"));
        assert_eq!(self_href(&json!({"name": "acl"})), None);
    }

    #[test]
    fn test_link_identity() {
        let a: Shared<Vec<u8>> = Rc::new(RefCell::new(vec![]));
        let b: Shared<Vec<u8>> = Rc::new(RefCell::new(vec![]));
        let link = Link::new("a", &a);
        assert!(link.is(&a));
        assert!(!link.is(&b));
        assert!(link.points_to(&link.clone()));
        assert!(!link.points_to(&Link::new("a", &b)));
        assert_eq!(format!("{:?}", link), "Link(\"a\")");
    }

    #[test]
    fn test_link_dangles_after_drop() {
        let a: Shared<u32> = Rc::new(RefCell::new(1));
        let link = Link::new("a", &a);
        assert!(link.upgrade().is_some());
        drop(a);
        assert!(link.upgrade().is_none());
    }

    #[test]
    fn test_set_link_once_conflict() {
        let a: Shared<u32> = Rc::new(RefCell::new(1));
        let b: Shared<u32> = Rc::new(RefCell::new(2));
        let mut slot = None;
        set_link_once(ResourceKind::Release, &mut slot, Link::new("a", &a)).unwrap();
        set_link_once(ResourceKind::Release, &mut slot, Link::new("a", &a)).unwrap();
        assert!(set_link_once(ResourceKind::Release, &mut slot, Link::new("b", &b)).is_err());
        assert_eq!(slot.unwrap().id(), "a");
    }
}
