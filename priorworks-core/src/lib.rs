#![deny(missing_docs)]
//! Prior works core library.
//!
//! Turns a user's repositories and manually declared projects into a single
//! deterministic Markdown list: admission, normalization, overrides,
//! validation and rendering all live here. Network and file output are left
//! to callers.

pub mod admission;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod normalize;
pub mod overrides;
pub mod pipeline;
pub mod render;
pub mod validate;

pub use admission::{AdmissionFilter, Decision, OrganizationAllowlist, Rejection};
pub use config::{Config, DEFAULT_TITLE, DocumentConfig, GitHubConfig, load_config};
pub use domain::{
    LinkOverride, MANUAL_ID_PREFIX, MANUAL_SLUG_OWNER, ManualProject, Project, RawOwner,
    RawRepository, RepoOverride,
};
pub use error::{MissingFields, PriorWorksError, Result, ValidationFailure};
pub use fs::{FileSystem, StdFileSystem};
pub use normalize::{from_manual, from_remote, prettify_slug};
pub use overrides::{OverrideTable, apply_override};
pub use pipeline::{PipelineContext, assemble_projects, build_document};
pub use render::{
    DATE_PLACEHOLDER, FrontMatter, interpolate_header, render_document, render_project_line,
    sort_projects, wrap_link,
};
pub use validate::{ensure_unique, missing_fields, validate_projects};
