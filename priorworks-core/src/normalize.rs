//! Conversion of source records and manual declarations into [`Project`]s.

use crate::domain::{MANUAL_ID_PREFIX, MANUAL_SLUG_OWNER, ManualProject, Project, RawRepository};
use crate::error::{PriorWorksError, Result};

/// Convert a repository slug into a display title.
///
/// `cool-app_v2` becomes `Cool App V2`. Repeated separators keep their
/// empty tokens, so the output always has one space per separator.
pub fn prettify_slug(slug: &str) -> String {
    slug.split(['-', '_', ' '])
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build a project from an admitted repository record.
pub fn from_remote(repo: &RawRepository) -> Result<Project> {
    let id = repo.id.ok_or_else(|| {
        PriorWorksError::DataIntegrity(format!(
            "repository {}/{} has no id",
            repo.owner.login, repo.name
        ))
    })?;
    Ok(Project {
        id: id.to_string(),
        slug: format!("{}/{}", repo.owner.login, repo.name),
        owner: repo.owner.login.clone(),
        slug_name: repo.name.clone(),
        name: prettify_slug(&repo.name),
        description: repo.description.clone().unwrap_or_default(),
        link: repo.html_url.clone(),
    })
}

/// Build a project from a manual declaration owned by `username`.
///
/// Manual names are used verbatim; they are already written for humans.
pub fn from_manual(username: &str, manual: &ManualProject) -> Project {
    Project {
        id: format!("{MANUAL_ID_PREFIX}{}", manual.name),
        slug: format!("{MANUAL_SLUG_OWNER}/{}", manual.name),
        owner: username.to_string(),
        slug_name: manual.name.clone(),
        name: manual.name.clone(),
        description: manual.description.clone().unwrap_or_default(),
        link: manual.link.clone(),
    }
}
