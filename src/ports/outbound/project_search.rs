use crate::shared::error::TransportError;
use serde_json::Value;

/// ProjectSearch port for looking up projects by name
///
/// SW360 answers a name query with abbreviated project documents; callers
/// pick the wanted version and fetch the full project by id afterwards.
pub trait ProjectSearch {
    /// Returns the abbreviated documents of all projects named `name`
    ///
    /// # Arguments
    /// * `name` - Exact project name
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be enumerated
    fn find_projects_by_name(&self, name: &str) -> Result<Vec<Value>, TransportError>;
}
