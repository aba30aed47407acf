use crate::application::dto::{
    CheckProjectRequest, LinkedProjectView, ProjectSelector, ProjectStatus, ReleaseStatusView,
};
use crate::ports::inbound::CheckProjectPort;
use crate::ports::outbound::{ProgressReporter, ProjectSearch, Sw360Transport};
use crate::resource_graph::domain::{
    id_from_href, self_href, Project, Release, Resource, Shared,
};
use crate::resource_graph::services::GraphSession;
use crate::shared::error::CheckError;
use crate::shared::Result;
use anyhow::Context;
use serde_json::{Map, Value};

/// CheckProjectUseCase - reports the clearing status of a project's releases
///
/// Builds the project graph through one `GraphSession`, so a release reached
/// both as a project member and through a later full fetch is the same
/// instance.
///
/// # Type Parameters
/// * `T` - Transport that can also search projects by name
/// * `PR` - ProgressReporter implementation
pub struct CheckProjectUseCase<T, PR> {
    transport: T,
    progress_reporter: PR,
    session: GraphSession,
}

impl<T, PR> CheckProjectUseCase<T, PR>
where
    T: Sw360Transport + ProjectSearch,
    PR: ProgressReporter,
{
    pub fn new(transport: T, progress_reporter: PR) -> Self {
        Self {
            transport,
            progress_reporter,
            session: GraphSession::new(),
        }
    }

    /// Session holding every resource loaded so far
    pub fn session(&self) -> &GraphSession {
        &self.session
    }

    /// Executes the check
    ///
    /// # Errors
    /// Returns an error if the project cannot be resolved or a payload
    /// cannot be fetched or decoded
    pub fn execute(&mut self, request: &CheckProjectRequest) -> Result<ProjectStatus> {
        let project_id = self.resolve_project_id(&request.project)?;

        self.progress_reporter
            .report(&format!("🔍 Loading project {}", project_id));
        let project = self
            .session
            .project(&self.transport, &project_id)
            .with_context(|| format!("Failed to load project '{}'", project_id))?;

        let mut status = Self::project_header(&project_id, &project.borrow());
        status.linked_projects = Self::linked_projects(&project.borrow());
        status.releases = self.release_statuses(&project, request.check_sources)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Checked {} release(s), {} open",
            status.releases.len(),
            status.open_releases().count()
        ));
        Ok(status)
    }

    /// Resolves the selector to a project id, searching by name when needed
    fn resolve_project_id(&self, selector: &ProjectSelector) -> Result<String> {
        let (name, version) = match selector {
            ProjectSelector::Id(id) => return Ok(id.clone()),
            ProjectSelector::NameVersion { name, version } => (name, version),
        };

        self.progress_reporter.report("🔎 Searching for projects");
        let candidates = self
            .transport
            .find_projects_by_name(name)
            .with_context(|| format!("Failed to search projects named '{}'", name))?;

        let wanted = version.to_lowercase();
        for candidate in &candidates {
            let Some(href) = self_href(candidate) else {
                continue;
            };
            let id = id_from_href(href)?;
            match candidate.get("version").and_then(Value::as_str) {
                Some(candidate_version) => {
                    self.progress_reporter.report(&format!(
                        "   {}, {} => ID = {}",
                        name, candidate_version, id
                    ));
                    if candidate_version.to_lowercase() == wanted {
                        return Ok(id);
                    }
                }
                None => {
                    self.progress_reporter
                        .report(&format!("   {} => ID = {}", name, id));
                }
            }
        }

        Err(CheckError::ProjectNotFound {
            name: name.clone(),
            version: version.clone(),
        }
        .into())
    }

    fn project_header(id: &str, project: &Project) -> ProjectStatus {
        let details = &project.base().details;
        ProjectStatus {
            id: id.to_string(),
            name: project.name.clone().unwrap_or_default(),
            version: project.version.clone(),
            project_responsible: detail_text(details, "projectResponsible"),
            project_owner: detail_text(details, "projectOwner"),
            clearing_state: detail_text(details, "clearingState"),
            linked_projects: Vec::new(),
            releases: Vec::new(),
        }
    }

    fn linked_projects(project: &Project) -> Vec<LinkedProjectView> {
        let mut linked: Vec<LinkedProjectView> = project
            .projects
            .iter()
            .map(|(id, linked)| {
                let linked = linked.borrow();
                LinkedProjectView {
                    id: id.clone(),
                    name: linked.name.clone().unwrap_or_default(),
                    version: linked.version.clone(),
                }
            })
            .collect();
        linked.sort_by_key(|view| view.name.to_lowercase());
        linked
    }

    fn release_statuses(
        &mut self,
        project: &Shared<Project>,
        check_sources: bool,
    ) -> Result<Vec<ReleaseStatusView>> {
        // Snapshot members and link table so the project is not borrowed while fetching
        let (mut releases, linked_releases): (Vec<Shared<Release>>, Option<Value>) = {
            let project = project.borrow();
            (
                project.releases.values().cloned().collect(),
                project.base().details.get("linkedReleases").cloned(),
            )
        };
        releases.sort_by_key(|release| {
            release
                .borrow()
                .name
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
        });

        let total = releases.len();
        let mut statuses = Vec::with_capacity(total);
        for (index, release) in releases.iter().enumerate() {
            let id = release.borrow().id().unwrap_or_default().to_string();
            let mainline_state = linked_releases
                .as_ref()
                .and_then(|links| mainline_state(links, &id));

            let mut view = release_view(&id, &release.borrow(), mainline_state);
            if check_sources && view.is_open() {
                view.source_available = Some(self.has_source(&id)?);
            }

            self.progress_reporter
                .report_progress(index + 1, total, Some(&view.name));
            statuses.push(view);
        }
        Ok(statuses)
    }

    /// Fetches the full release; the identity map hands back the member
    /// instance, now augmented with its attachments.
    fn has_source(&mut self, release_id: &str) -> Result<bool> {
        let release = self
            .session
            .release(&self.transport, release_id)
            .with_context(|| format!("Failed to load release '{}'", release_id))?;
        let release = release.borrow();
        Ok(release
            .attachments
            .values()
            .any(|attachment| attachment.borrow().is_source()))
    }
}

impl<T, PR> CheckProjectPort for CheckProjectUseCase<T, PR>
where
    T: Sw360Transport + ProjectSearch,
    PR: ProgressReporter,
{
    fn check_project(&mut self, request: &CheckProjectRequest) -> Result<ProjectStatus> {
        self.execute(request)
    }
}

fn release_view(id: &str, release: &Release, mainline_state: Option<String>) -> ReleaseStatusView {
    ReleaseStatusView {
        id: id.to_string(),
        name: release.name.clone().unwrap_or_default(),
        version: release.version.clone(),
        mainline_state,
        source_available: None,
        purls: release
            .base()
            .purls
            .iter()
            .map(|purl| purl.to_string())
            .collect(),
    }
}

/// Looks up `mainlineState` of the `linkedReleases` entry pointing at `release_id`
fn mainline_state(linked_releases: &Value, release_id: &str) -> Option<String> {
    linked_releases
        .as_array()?
        .iter()
        .find(|entry| {
            entry
                .get("release")
                .and_then(Value::as_str)
                .and_then(|href| id_from_href(href).ok())
                .is_some_and(|id| id == release_id)
        })
        .and_then(|entry| entry.get("mainlineState"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn detail_text(details: &Map<String, Value>, key: &str) -> Option<String> {
    details.get(key).and_then(Value::as_str).map(str::to_string)
}
