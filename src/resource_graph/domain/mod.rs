//! Domain model of the resource graph: the four SW360 resource types,
//! their common base, typed links and package URLs.

pub mod attachment;
pub mod component;
pub mod link;
pub mod project;
pub mod purl;
pub mod release;
pub mod resource;

pub use attachment::{Attachment, SOURCE_ATTACHMENT_TYPE};
pub use component::Component;
pub use link::{id_from_href, link_href, self_href, Link};
pub use project::Project;
pub use purl::{Purl, PURL_PREFIX};
pub use release::Release;
pub use resource::{
    Resource, ResourceBase, ResourceHandle, ResourceKind, ResourceLink, ScalarField, Shared,
};
