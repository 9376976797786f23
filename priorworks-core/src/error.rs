//! Error types for the prior works pipeline.

use std::{error::Error, fmt, io};

/// A project that failed validation, with the required fields it lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields {
    /// Display name of the project, or its slug when the name itself is missing.
    pub name: String,
    /// `owner/slugName` identity of the project.
    pub slug: String,
    /// Names of the missing required fields, in declaration order.
    pub fields: Vec<&'static str>,
}

/// Aggregated validation report covering every offending project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// One entry per project with at least one missing field.
    pub projects: Vec<MissingFields>,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Some projects are missing required fields. Set values for these fields via the github.repoOverrides configuration field."
        )?;
        writeln!(f)?;
        write!(f, "Missing data:")?;
        for project in &self.projects {
            write!(
                f,
                "\n  {}: Missing fields: {} (slug: {})",
                project.name,
                project.fields.join(", "),
                project.slug
            )?;
        }
        Ok(())
    }
}

/// Error type for prior works operations.
#[derive(Debug)]
pub enum PriorWorksError {
    /// An underlying I/O error.
    Io(io::Error),
    /// Configuration is malformed or missing required values.
    Config(String),
    /// A source record broke a structural invariant (missing id, duplicate id).
    DataIntegrity(String),
    /// One or more assembled projects are missing required fields.
    Validation(ValidationFailure),
}

impl fmt::Display for PriorWorksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Config(message) => write!(f, "configuration error: {message}"),
            Self::DataIntegrity(message) => write!(f, "data integrity error: {message}"),
            Self::Validation(failure) => write!(f, "{failure}"),
        }
    }
}

impl Error for PriorWorksError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PriorWorksError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ValidationFailure> for PriorWorksError {
    fn from(value: ValidationFailure) -> Self {
        Self::Validation(value)
    }
}

/// Convenience result type for prior works operations.
pub type Result<T> = std::result::Result<T, PriorWorksError>;
