//! Markdown rendering of the validated project list.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::DocumentConfig;
use crate::domain::Project;

/// Placeholder in the Markdown header replaced with the generation date.
pub const DATE_PLACEHOLDER: &str = "{{DATE}}";

/// Text surrounding the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    /// Block inserted at the very top, before the title.
    pub header: Option<String>,
    /// Title line, rendered as a level one heading.
    pub title: String,
    /// Introductory paragraph.
    pub description: String,
}

impl FrontMatter {
    /// Build front matter from document settings, dating the header with `date`.
    pub fn from_document(document: &DocumentConfig, date: NaiveDate) -> Self {
        Self {
            header: document
                .markdown_header
                .as_deref()
                .map(|header| interpolate_header(header, date)),
            title: document.title.clone(),
            description: document.description.clone(),
        }
    }
}

/// Replace every [`DATE_PLACEHOLDER`] in `header` with `date` as `M/D/YYYY`.
pub fn interpolate_header(header: &str, date: NaiveDate) -> String {
    if !header.contains(DATE_PLACEHOLDER) {
        return header.to_string();
    }
    let formatted = date.format("%-m/%-d/%Y").to_string();
    header.replace(DATE_PLACEHOLDER, &formatted)
}

/// Wrap `text` in a Markdown link when `link` is present.
pub fn wrap_link(text: &str, link: Option<&str>) -> String {
    match link {
        Some(link) => format!("[{text}]({link})"),
        None => text.to_string(),
    }
}

/// Render one list item for `project`.
pub fn render_project_line(project: &Project) -> String {
    format!(
        "- **{}**: {}",
        wrap_link(&project.name, project.link.as_deref()),
        project.description
    )
}

/// Sort by name, case-sensitive, keeping encounter order for equal names.
pub fn sort_projects(mut projects: Vec<Project>) -> Vec<Project> {
    projects.sort_by(|a, b| a.name.cmp(&b.name));
    projects
}

/// Render the full document. Projects are sorted before rendering.
pub fn render_document(front: &FrontMatter, projects: Vec<Project>) -> String {
    let mut output = String::new();
    if let Some(header) = front.header.as_deref().filter(|header| !header.trim().is_empty()) {
        let _ = writeln!(output, "{}\n", header.trim_end());
    }
    let _ = writeln!(output, "# {}", front.title);
    let _ = writeln!(output, "{}", front.description.trim_end());

    let projects = sort_projects(projects);
    if !projects.is_empty() {
        let _ = writeln!(output);
        for project in &projects {
            let _ = writeln!(output, "{}", render_project_line(project));
        }
    }
    output
}
