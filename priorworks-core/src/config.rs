//! Configuration model and loader.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{ManualProject, RepoOverride};
use crate::error::{PriorWorksError, Result};
use crate::fs::FileSystem;

/// Title used when the configuration does not set one.
pub const DEFAULT_TITLE: &str = "Prior Inventions";

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Output document settings.
    pub document: DocumentConfig,
    /// Source account settings.
    pub github: GitHubConfig,
    /// Projects declared directly rather than sourced.
    #[serde(default)]
    pub projects: Vec<ManualProject>,
}

/// Output document settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentConfig {
    /// Path of the Markdown file to write.
    pub file: PathBuf,
    /// Introductory paragraph shown before the project list.
    pub description: String,
    /// Text inserted at the very top of the document.
    #[serde(default)]
    pub markdown_header: Option<String>,
    /// Title line of the document.
    #[serde(default = "default_title")]
    pub title: String,
}

/// Source account settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubConfig {
    /// Login of the account whose repositories are listed.
    pub username: String,
    /// Personal access token. May instead come from `GITHUB_TOKEN`.
    #[serde(default)]
    pub token: Option<String>,
    /// `(organization, [repository, ...])` pairs admitted from organizations.
    #[serde(default)]
    pub organizations: Vec<(String, Vec<String>)>,
    /// Per-repository overrides keyed by slug.
    #[serde(default)]
    pub repo_overrides: Vec<RepoOverride>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Config {
    /// Check the configuration for missing or conflicting values.
    pub fn validate(&self) -> Result<()> {
        if self.document.file.as_os_str().is_empty() {
            return Err(config_error("document.file is required"));
        }
        if self.document.description.trim().is_empty() {
            return Err(config_error("document.description is required"));
        }
        if self.github.username.trim().is_empty() {
            return Err(config_error("github.username is required"));
        }

        let mut organizations = HashSet::new();
        for (organization, _) in &self.github.organizations {
            if organization.trim().is_empty() {
                return Err(config_error("github.organizations entry has an empty slug"));
            }
            if !organizations.insert(organization.as_str()) {
                return Err(config_error(format!(
                    "github.organizations lists {organization} more than once"
                )));
            }
        }

        let mut slugs = HashSet::new();
        for repo_override in &self.github.repo_overrides {
            if repo_override.slug.trim().is_empty() {
                return Err(config_error("github.repoOverrides entry has an empty slug"));
            }
            if !slugs.insert(repo_override.slug.as_str()) {
                return Err(config_error(format!(
                    "github.repoOverrides lists {} more than once",
                    repo_override.slug
                )));
            }
        }

        Ok(())
    }

    /// Replace the configured token when `token` is present and non-blank.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|value| !value.trim().is_empty()) {
            self.github.token = Some(token);
        }
        self
    }

    /// Return the resolved token, failing when none is configured.
    pub fn require_token(&self) -> Result<&str> {
        self.github
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| config_error("github.token or GITHUB_TOKEN is required"))
    }
}

/// Read, parse, and validate a JSON configuration file.
pub fn load_config<F: FileSystem>(fs: &F, path: &Path) -> Result<Config> {
    let contents = fs
        .read_to_string(path)
        .map_err(|err| config_error(format!("read {}: {err}", path.display())))?;
    let config: Config = serde_json::from_str(&contents)
        .map_err(|err| config_error(format!("parse {}: {err}", path.display())))?;
    config.validate()?;
    Ok(config)
}

fn config_error(message: impl Into<String>) -> PriorWorksError {
    PriorWorksError::Config(message.into())
}
