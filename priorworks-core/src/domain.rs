//! Domain entities for prior works aggregation.

use serde::{Deserialize, Deserializer};

/// Reserved id namespace for manually declared projects.
pub const MANUAL_ID_PREFIX: &str = "manualproject:";
/// Reserved owner segment used in manual project slugs.
pub const MANUAL_SLUG_OWNER: &str = "__manualprojects";

/// A project listed in the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Unique identifier. Remote ids are numeric, manual ids carry [`MANUAL_ID_PREFIX`].
    pub id: String,
    /// `owner/name` pseudo-path, unique within a run.
    pub slug: String,
    /// Account or organization that owns the project.
    pub owner: String,
    /// Short machine name of the project.
    pub slug_name: String,
    /// Human readable name.
    pub name: String,
    /// Human readable description.
    pub description: String,
    /// Link to the project. `None` renders without a hyperlink.
    pub link: Option<String>,
}

/// Owner block of a repository record returned by the source API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawOwner {
    /// Account or organization slug.
    pub login: String,
}

/// Repository record as returned by the source API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRepository {
    /// Numeric repository id. Optional only so its absence can be reported.
    #[serde(default)]
    pub id: Option<u64>,
    /// Owning account.
    pub owner: RawOwner,
    /// Repository name.
    pub name: String,
    /// Whether the repository is a fork.
    #[serde(default)]
    pub fork: bool,
    /// Web URL of the repository.
    #[serde(default)]
    pub html_url: Option<String>,
    /// Homepage configured on the repository, if any.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Repository description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A project declared directly in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManualProject {
    /// Human readable name, also used as the machine name.
    pub name: String,
    /// Description of the project.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional link to the project.
    #[serde(default)]
    pub link: Option<String>,
}

/// What a repository override does to a project's link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LinkOverride {
    /// Leave the link as sourced.
    #[default]
    Unchanged,
    /// Drop the link so the project renders as plain text.
    Remove,
    /// Replace the link.
    Set(String),
}

/// Operator supplied replacement values for a sourced project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepoOverride {
    /// Slug (`owner/name`) of the project to override.
    pub slug: String,
    /// Replacement display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement link; `null` removes the link, omission leaves it untouched.
    #[serde(default, deserialize_with = "deserialize_link_override")]
    pub link: LinkOverride,
}

fn deserialize_link_override<'de, D>(deserializer: D) -> Result<LinkOverride, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<String>::deserialize(deserializer)? {
        Some(link) => LinkOverride::Set(link),
        None => LinkOverride::Remove,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_override_distinguishes_absent_null_and_value() {
        let absent: RepoOverride = serde_json::from_str(r#"{"slug": "a/b"}"#).expect("absent");
        assert_eq!(absent.link, LinkOverride::Unchanged);

        let null: RepoOverride =
            serde_json::from_str(r#"{"slug": "a/b", "link": null}"#).expect("null");
        assert_eq!(null.link, LinkOverride::Remove);

        let set: RepoOverride =
            serde_json::from_str(r#"{"slug": "a/b", "link": "https://b.dev"}"#).expect("set");
        assert_eq!(set.link, LinkOverride::Set("https://b.dev".to_string()));
    }

    #[test]
    fn raw_repository_parses_github_payload() {
        let payload = serde_json::json!({
            "id": 42,
            "name": "cool-app",
            "owner": {"login": "alice", "type": "User"},
            "fork": false,
            "html_url": "https://github.com/alice/cool-app",
            "homepage": null,
            "description": null,
            "stargazers_count": 3
        });
        let repo: RawRepository = serde_json::from_value(payload).expect("parse repo");
        assert_eq!(repo.id, Some(42));
        assert_eq!(repo.owner.login, "alice");
        assert!(!repo.fork);
        assert_eq!(repo.description, None);
    }

    #[test]
    fn raw_repository_tolerates_missing_id() {
        let repo: RawRepository =
            serde_json::from_str(r#"{"name": "x", "owner": {"login": "alice"}}"#).expect("parse");
        assert_eq!(repo.id, None);
    }
}
