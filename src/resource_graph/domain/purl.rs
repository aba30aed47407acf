use packageurl::PackageUrl;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Scheme prefix every package URL starts with
pub const PURL_PREFIX: &str = "pkg:";

/// Parsed package URL value object.
///
/// Equality, ordering and hashing use the canonical string form, so the same
/// package reached through different encodings collapses to one value.
#[derive(Debug, Clone)]
pub struct Purl {
    canonical: String,
    ty: String,
    namespace: Option<String>,
    name: String,
    version: Option<String>,
    qualifiers: BTreeMap<String, String>,
    subpath: Option<String>,
}

impl Purl {
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn qualifiers(&self) -> &BTreeMap<String, String> {
        &self.qualifiers
    }

    pub fn subpath(&self) -> Option<&str> {
        self.subpath.as_deref()
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

impl FromStr for Purl {
    type Err = packageurl::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = PackageUrl::from_str(s.trim())?;
        Ok(Self {
            canonical: parsed.to_string(),
            ty: parsed.ty().to_string(),
            namespace: parsed.namespace().map(|ns| ns.to_string()),
            name: parsed.name().to_string(),
            version: parsed.version().map(|v| v.to_string()),
            qualifiers: parsed
                .qualifiers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            subpath: parsed.subpath().map(|p| p.to_string()),
        })
    }
}

impl fmt::Display for Purl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl PartialEq for Purl {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Purl {}

impl Hash for Purl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for Purl {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Purl {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl Serialize for Purl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical)
    }
}
