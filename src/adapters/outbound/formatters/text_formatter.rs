use crate::application::dto::{ProjectStatus, ReleaseStatusView};
use crate::ports::outbound::StatusFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

const MISSING: &str = "n/a";

/// TextStatusFormatter adapter rendering the report as indented text
///
/// OPEN releases are highlighted in yellow, OPEN releases without a SOURCE
/// attachment in red. Color can be switched off for files and pipes.
pub struct TextStatusFormatter {
    color: bool,
}

impl TextStatusFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn release_line(&self, release: &ReleaseStatusView) -> String {
        let mut line = format!(
            "{}; {}; {}",
            release.name,
            release.version.as_deref().unwrap_or(MISSING),
            release.mainline_state.as_deref().unwrap_or(MISSING)
        );
        if release.is_missing_source() {
            line.push_str("; No source provided");
        }

        if !self.color {
            return line;
        }
        if release.is_missing_source() {
            line.bright_red().to_string()
        } else if release.is_open() {
            line.bright_yellow().to_string()
        } else {
            line
        }
    }
}

impl Default for TextStatusFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StatusFormatter for TextStatusFormatter {
    fn format(&self, status: &ProjectStatus) -> Result<String> {
        let mut out = String::new();

        writeln!(
            out,
            "  Project name: {}, {}",
            status.name,
            status.version.as_deref().unwrap_or(MISSING)
        )?;
        if let Some(responsible) = &status.project_responsible {
            writeln!(out, "  Project responsible: {}", responsible)?;
        }
        writeln!(
            out,
            "  Project owner: {}",
            status.project_owner.as_deref().unwrap_or(MISSING)
        )?;
        writeln!(
            out,
            "  Clearing state: {}",
            status.clearing_state.as_deref().unwrap_or(MISSING)
        )?;

        if status.linked_projects.is_empty() {
            writeln!(out, "\n    No linked projects")?;
        } else {
            writeln!(out, "\n  Linked projects:")?;
            for linked in &status.linked_projects {
                writeln!(
                    out,
                    "    {}, {}",
                    linked.name,
                    linked.version.as_deref().unwrap_or(MISSING)
                )?;
            }
        }

        if status.releases.is_empty() {
            writeln!(out, "\n    No linked releases")?;
        } else {
            writeln!(out, "\n  Components:")?;
            for release in &status.releases {
                writeln!(out, "    {}", self.release_line(release))?;
                for purl in &release.purls {
                    writeln!(out, "      {}", purl)?;
                }
            }
        }

        Ok(out)
    }
}
