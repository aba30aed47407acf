use crate::application::dto::ProjectStatus;
use crate::ports::outbound::StatusFormatter;
use crate::shared::Result;

/// JsonStatusFormatter adapter serializing the report with serde_json
pub struct JsonStatusFormatter;

impl JsonStatusFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonStatusFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusFormatter for JsonStatusFormatter {
    fn format(&self, status: &ProjectStatus) -> Result<String> {
        let mut json = serde_json::to_string_pretty(status)?;
        json.push('\n');
        Ok(json)
    }
}
