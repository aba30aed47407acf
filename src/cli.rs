use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use sw360_graph::application::dto::{CheckProjectRequest, OutputFormat};

/// Check a project in an SW360 snapshot and display its component clearing status
#[derive(Parser, Debug)]
#[command(name = "sw360-graph")]
#[command(
    about = "Check a project in an SW360 snapshot and display its component clearing status",
    long_about = None,
    disable_version_flag = true
)]
#[command(group(ArgGroup::new("project").required(true).args(["id", "name"])))]
pub struct Args {
    /// Snapshot directory with projects/, components/, releases/ and attachments/
    #[arg(short, long, value_name = "DIR")]
    pub snapshot: Option<PathBuf>,

    /// SW360 id of the project, supersedes name and version
    #[arg(long = "id", value_name = "PROJECT_ID", conflicts_with_all = ["name", "project_version"])]
    pub id: Option<String>,

    /// Name of the project
    #[arg(short, long, requires = "project_version")]
    pub name: Option<String>,

    /// Version of the project (compared case-insensitively)
    #[arg(short = 'v', long = "version", value_name = "VERSION", requires = "name")]
    pub project_version: Option<String>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./sw360-graph.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fetch OPEN releases to check for a SOURCE attachment
    #[arg(long)]
    pub check_sources: bool,

    /// Exit with code 1 when a release is still in OPEN clearing state
    #[arg(long)]
    pub fail_on_open: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Request for the selected project; `check_sources` is merged with the config later
    pub fn project_request(&self) -> Option<CheckProjectRequest> {
        match (&self.id, &self.name, &self.project_version) {
            (Some(id), _, _) => Some(CheckProjectRequest::by_id(id.clone())),
            (None, Some(name), Some(version)) => {
                Some(CheckProjectRequest::by_name(name.clone(), version.clone()))
            }
            _ => None,
        }
    }
}
