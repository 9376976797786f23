//! Completeness and uniqueness checks over the merged project set.

use std::collections::HashSet;

use crate::domain::Project;
use crate::error::{MissingFields, PriorWorksError, Result, ValidationFailure};

/// Names of the required fields missing from `project`. Blank values count as missing.
pub fn missing_fields(project: &Project) -> Vec<&'static str> {
    [
        ("owner", &project.owner),
        ("slugName", &project.slug_name),
        ("name", &project.name),
        ("description", &project.description),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect()
}

/// Check every project, failing with a report that names all offenders.
pub fn validate_projects(projects: Vec<Project>) -> Result<Vec<Project>> {
    let offenders: Vec<MissingFields> = projects
        .iter()
        .filter_map(|project| {
            let fields = missing_fields(project);
            if fields.is_empty() {
                return None;
            }
            let slug = format!("{}/{}", project.owner, project.slug_name);
            let name = if project.name.trim().is_empty() {
                slug.clone()
            } else {
                project.name.clone()
            };
            Some(MissingFields { name, slug, fields })
        })
        .collect();

    if offenders.is_empty() {
        Ok(projects)
    } else {
        Err(ValidationFailure {
            projects: offenders,
        }
        .into())
    }
}

/// Fail when two projects share an `id` or a `slug`.
pub fn ensure_unique(projects: &[Project]) -> Result<()> {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();
    for project in projects {
        if !ids.insert(project.id.as_str()) {
            return Err(PriorWorksError::DataIntegrity(format!(
                "duplicate project id {}",
                project.id
            )));
        }
        if !slugs.insert(project.slug.as_str()) {
            return Err(PriorWorksError::DataIntegrity(format!(
                "duplicate project slug {}",
                project.slug
            )));
        }
    }
    Ok(())
}
