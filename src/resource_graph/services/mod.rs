//! Graph construction: identity map, payload decoding and purl normalization.

pub mod decoder;
pub mod external_ids;
pub mod registry;
pub mod session;

pub use decoder::{Decoder, Relation};
pub use external_ids::{normalize_external_ids, purl_candidates, ExternalIdPartition};
pub use registry::{Registry, ResourceKey};
pub use session::GraphSession;
