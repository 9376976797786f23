//! Application of configured per-repository overrides.

use std::collections::HashMap;

use crate::domain::{LinkOverride, Project, RepoOverride};

/// Overrides keyed by project slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    by_slug: HashMap<String, RepoOverride>,
}

impl OverrideTable {
    /// Index overrides by slug. Later entries win on duplicate slugs.
    pub fn from_overrides(overrides: &[RepoOverride]) -> Self {
        let by_slug = overrides
            .iter()
            .map(|entry| (entry.slug.clone(), entry.clone()))
            .collect();
        Self { by_slug }
    }

    /// Look up the override for `slug`.
    pub fn get(&self, slug: &str) -> Option<&RepoOverride> {
        self.by_slug.get(slug)
    }

    /// Number of configured overrides.
    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    /// Whether no overrides are configured.
    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }

    /// Apply the override matching `project.slug`, if any.
    pub fn resolve(&self, project: Project) -> Project {
        match self.get(&project.slug) {
            Some(entry) => {
                log::debug!("applying override for {}", project.slug);
                apply_override(project, entry)
            }
            None => project,
        }
    }
}

/// Merge the three overridable fields of `entry` onto `project`.
pub fn apply_override(project: Project, entry: &RepoOverride) -> Project {
    let link = match &entry.link {
        LinkOverride::Unchanged => project.link,
        LinkOverride::Remove => None,
        LinkOverride::Set(link) => Some(link.clone()),
    };
    Project {
        name: entry.name.clone().unwrap_or(project.name),
        description: entry.description.clone().unwrap_or(project.description),
        link,
        ..project
    }
}
