use serde::Serialize;

/// Clearing state SW360 uses for releases nobody has looked at yet
pub const OPEN_STATE: &str = "OPEN";

/// Status report of one project, as produced by the check-project use case
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatus {
    pub id: String,
    pub name: String,
    pub version: Option<String>,
    pub project_responsible: Option<String>,
    pub project_owner: Option<String>,
    pub clearing_state: Option<String>,
    pub linked_projects: Vec<LinkedProjectView>,
    pub releases: Vec<ReleaseStatusView>,
}

impl ProjectStatus {
    /// Releases still waiting for clearing
    pub fn open_releases(&self) -> impl Iterator<Item = &ReleaseStatusView> {
        self.releases.iter().filter(|release| release.is_open())
    }

    pub fn has_open_releases(&self) -> bool {
        self.open_releases().next().is_some()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedProjectView {
    pub id: String,
    pub name: String,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseStatusView {
    pub id: String,
    pub name: String,
    pub version: Option<String>,
    /// `mainlineState` of the project's link to this release
    pub mainline_state: Option<String>,
    /// Only known for OPEN releases when source checking is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_available: Option<bool>,
    pub purls: Vec<String>,
}

impl ReleaseStatusView {
    pub fn is_open(&self) -> bool {
        self.mainline_state.as_deref() == Some(OPEN_STATE)
    }

    /// OPEN release confirmed to have no SOURCE attachment
    pub fn is_missing_source(&self) -> bool {
        self.is_open() && self.source_available == Some(false)
    }
}
