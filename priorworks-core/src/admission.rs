//! Decides which source repositories qualify as projects.

use std::collections::{BTreeSet, HashMap};

use crate::domain::RawRepository;
use crate::error::{PriorWorksError, Result};

/// Organizations whose listed repositories may be admitted.
///
/// An organization without an entry is fully disallowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationAllowlist {
    repos: HashMap<String, BTreeSet<String>>,
}

impl OrganizationAllowlist {
    /// Build the allowlist from `(organization, [repository, ...])` pairs.
    pub fn from_pairs(pairs: &[(String, Vec<String>)]) -> Self {
        let repos = pairs
            .iter()
            .map(|(organization, names)| {
                (organization.clone(), names.iter().cloned().collect())
            })
            .collect();
        Self { repos }
    }

    /// Whether `organization` has an entry, even an empty one.
    pub fn contains_organization(&self, organization: &str) -> bool {
        self.repos.contains_key(organization)
    }

    /// Whether `repo` is explicitly allowed within `organization`.
    pub fn allows(&self, organization: &str, repo: &str) -> bool {
        self.repos
            .get(organization)
            .map(|names| names.contains(repo))
            .unwrap_or(false)
    }
}

/// Why a repository was not admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Owned by an account that is neither the user nor a listed organization.
    ForeignOwner,
    /// Owned by a listed organization that does not allow this repository.
    NotAllowlisted,
    /// The repository is a fork.
    Fork,
}

impl Rejection {
    /// Short human readable reason.
    pub fn reason(self) -> &'static str {
        match self {
            Self::ForeignOwner => "owner is not the configured user or an allowed organization",
            Self::NotAllowlisted => "repository is not in the organization allowlist",
            Self::Fork => "repository is a fork",
        }
    }
}

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The repository becomes a candidate project.
    Admit,
    /// The repository is silently dropped.
    Reject(Rejection),
}

/// Admission rules for one run.
#[derive(Debug, Clone)]
pub struct AdmissionFilter<'a> {
    username: &'a str,
    allowlist: &'a OrganizationAllowlist,
}

impl<'a> AdmissionFilter<'a> {
    /// Create a filter for the given account and organization allowlist.
    pub fn new(username: &'a str, allowlist: &'a OrganizationAllowlist) -> Self {
        Self {
            username,
            allowlist,
        }
    }

    /// Decide whether `repo` is admitted.
    ///
    /// A record without an id aborts the run with a data integrity error.
    pub fn check(&self, repo: &RawRepository) -> Result<Decision> {
        let owner = repo.owner.login.as_str();
        if owner != self.username {
            if !self.allowlist.contains_organization(owner) {
                return Ok(Decision::Reject(Rejection::ForeignOwner));
            }
            if !self.allowlist.allows(owner, &repo.name) {
                return Ok(Decision::Reject(Rejection::NotAllowlisted));
            }
        }

        if repo.fork {
            return Ok(Decision::Reject(Rejection::Fork));
        }

        if repo.id.is_none() {
            return Err(PriorWorksError::DataIntegrity(format!(
                "repository {owner}/{} has no id",
                repo.name
            )));
        }

        Ok(Decision::Admit)
    }

    /// Decide admission as a plain boolean.
    pub fn admit(&self, repo: &RawRepository) -> Result<bool> {
        Ok(self.check(repo)? == Decision::Admit)
    }

    /// Keep only admitted repositories, preserving their order.
    pub fn filter<'r>(&self, repos: &'r [RawRepository]) -> Result<Vec<&'r RawRepository>> {
        let mut admitted = Vec::new();
        for repo in repos {
            match self.check(repo)? {
                Decision::Admit => admitted.push(repo),
                Decision::Reject(rejection) => log::debug!(
                    "skipping {}/{}: {}",
                    repo.owner.login,
                    repo.name,
                    rejection.reason()
                ),
            }
        }
        Ok(admitted)
    }
}
