//! GitHub repository source.

use crate::CliResult;
use priorworks_core::RawRepository;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "priorworks-cli";
const PER_PAGE: &str = "100";
const AFFILIATION: &str = "owner,organization_member";

/// Lists the repositories visible to the configured account.
pub(crate) trait RepositorySource {
    fn list_repositories<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = CliResult<Vec<RawRepository>>> + Send + 'a>>;
}

/// Reqwest-backed GitHub REST client.
pub(crate) struct GitHubRepositorySource {
    client: Client,
    base_url: String,
    token: String,
}

impl GitHubRepositorySource {
    /// Build a client against `base_url` authenticated with `token`.
    pub(crate) fn new(base_url: &str, token: &str) -> CliResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err("github api url is required".into());
        }
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            token: token.to_string(),
        })
    }

    /// Build a client using `GITHUB_API_URL` when set, else the public API.
    #[cfg_attr(test, allow(dead_code))]
    pub(crate) fn from_env(token: &str) -> CliResult<Self> {
        let base_url = std::env::var("GITHUB_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(&base_url, token)
    }
}

impl RepositorySource for GitHubRepositorySource {
    fn list_repositories<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = CliResult<Vec<RawRepository>>> + Send + 'a>> {
        Box::pin(list_user_repos(&self.client, &self.base_url, &self.token))
    }
}

/// Fetch the first page of repositories for the authenticated user.
async fn list_user_repos(
    client: &Client,
    base_url: &str,
    token: &str,
) -> CliResult<Vec<RawRepository>> {
    let url = format!("{base_url}/user/repos");
    log::debug!("GET {url}");
    let response = client
        .get(url)
        .bearer_auth(token)
        .header("Accept", "application/vnd.github+json")
        .query(&[("per_page", PER_PAGE), ("affiliation", AFFILIATION)])
        .send()
        .await?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("github api error ({status}): {body}").into());
    }
    let repos = response.json::<Vec<RawRepository>>().await?;
    log::info!("fetched {} repositories", repos.len());
    Ok(repos)
}
