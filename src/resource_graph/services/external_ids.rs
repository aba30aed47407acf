//! Splits an `externalIds` payload into opaque external ids and package URLs.
//!
//! SW360 has encoded the same logical field in several ways over time:
//! a single purl string, several purls separated by whitespace, a proper JSON
//! array, and (as of 2022) a string containing a JSON array. Every id name is
//! scanned, not just `package-url`.

use crate::resource_graph::domain::{Purl, PURL_PREFIX};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Result of normalizing one `externalIds` object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalIdPartition {
    pub external_ids: BTreeMap<String, Value>,
    pub purls: BTreeSet<Purl>,
}

impl ExternalIdPartition {
    /// Id names that were fully consumed as package URLs
    pub fn consumed<'a>(&self, raw: &'a Map<String, Value>) -> Vec<&'a str> {
        raw.keys()
            .filter(|name| !self.external_ids.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// Partitions `raw` into opaque ids and parsed purls.
///
/// An id name is consumed as soon as one of its candidates parses; candidates
/// that fail to parse are dropped silently in that case. Id names without any
/// parseable candidate are kept verbatim.
pub fn normalize_external_ids(raw: &Map<String, Value>) -> ExternalIdPartition {
    let mut partition = ExternalIdPartition::default();

    for (id_name, id_value) in raw {
        let mut parsed_any = false;
        for candidate in purl_candidates(id_value) {
            if !candidate.starts_with(PURL_PREFIX) {
                continue;
            }
            match candidate.parse::<Purl>() {
                Ok(purl) => {
                    partition.purls.insert(purl);
                    parsed_any = true;
                }
                Err(e) => {
                    tracing::warn!(id_name = %id_name, candidate = %candidate, error = %e, "discarding malformed package url");
                }
            }
        }

        if !parsed_any {
            partition
                .external_ids
                .insert(id_name.clone(), id_value.clone());
        }
    }

    partition
}

/// Normalizes an external-id value to its list of candidate strings.
pub fn purl_candidates(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => string_candidates(text),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

fn string_candidates(text: &str) -> Vec<String> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        match serde_json::from_str::<Vec<Value>>(trimmed) {
            Ok(items) => return purl_candidates(&Value::Array(items)),
            Err(e) => {
                tracing::debug!(error = %e, "external id looks like a JSON array but does not parse, splitting on whitespace");
            }
        }
    }
    text.split_whitespace().map(str::to_string).collect()
}
