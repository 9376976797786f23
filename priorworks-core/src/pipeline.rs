//! Composition of admission, normalization, overrides, validation and rendering.

use crate::admission::{AdmissionFilter, OrganizationAllowlist};
use crate::config::Config;
use crate::domain::{ManualProject, Project, RawRepository};
use crate::error::Result;
use crate::normalize::{from_manual, from_remote};
use crate::overrides::OverrideTable;
use crate::render::{FrontMatter, render_document};
use crate::validate::{ensure_unique, validate_projects};

/// Lookup tables built once per run and shared by every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineContext {
    /// Account whose own repositories are always admissible.
    pub username: String,
    /// Organization repositories that may be admitted.
    pub allowlist: OrganizationAllowlist,
    /// Overrides for remote projects.
    pub overrides: OverrideTable,
}

impl PipelineContext {
    /// Build the context from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            username: config.github.username.clone(),
            allowlist: OrganizationAllowlist::from_pairs(&config.github.organizations),
            overrides: OverrideTable::from_overrides(&config.github.repo_overrides),
        }
    }
}

/// Merge remote and manual sources into a validated project list.
///
/// Remote projects keep their fetch order and precede manual ones.
pub fn assemble_projects(
    ctx: &PipelineContext,
    repos: &[RawRepository],
    manual: &[ManualProject],
) -> Result<Vec<Project>> {
    let filter = AdmissionFilter::new(&ctx.username, &ctx.allowlist);
    let admitted = filter.filter(repos)?;

    let mut projects = admitted
        .into_iter()
        .map(|repo| from_remote(repo).map(|project| ctx.overrides.resolve(project)))
        .collect::<Result<Vec<_>>>()?;
    let remote_count = projects.len();

    projects.extend(
        manual
            .iter()
            .map(|declared| from_manual(&ctx.username, declared)),
    );

    log::info!(
        "assembled {} projects ({remote_count} of {} repositories admitted, {} manual)",
        projects.len(),
        repos.len(),
        manual.len()
    );

    ensure_unique(&projects)?;
    validate_projects(projects)
}

/// Assemble, validate and render the document text.
pub fn build_document(
    ctx: &PipelineContext,
    front: &FrontMatter,
    repos: &[RawRepository],
    manual: &[ManualProject],
) -> Result<String> {
    let projects = assemble_projects(ctx, repos, manual)?;
    Ok(render_document(front, projects))
}
