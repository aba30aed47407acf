/// How the project to check is identified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSelector {
    /// SW360 project id, used as is
    Id(String),
    /// Project name plus version; the version is compared case-insensitively
    NameVersion { name: String, version: String },
}

/// CheckProjectRequest - request DTO for the check-project use case
#[derive(Debug, Clone)]
pub struct CheckProjectRequest {
    pub project: ProjectSelector,
    /// Fetch OPEN releases in full to see whether a SOURCE attachment exists
    pub check_sources: bool,
}

impl CheckProjectRequest {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            project: ProjectSelector::Id(id.into()),
            check_sources: false,
        }
    }

    pub fn by_name(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            project: ProjectSelector::NameVersion {
                name: name.into(),
                version: version.into(),
            },
            check_sources: false,
        }
    }

    pub fn with_check_sources(mut self, check_sources: bool) -> Self {
        self.check_sources = check_sources;
        self
    }
}
