//! In-memory graph of SW360 resources.
//!
//! `domain` holds the resource types and links, `services` decodes HAL
//! payloads into them while keeping one instance per `(kind, id)`.

pub mod domain;
pub mod services;
