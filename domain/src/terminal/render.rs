//! Text rendering for content records
//!
//! Each record becomes a fixed multi-line block:
//!
//! ```text
//!
//! [ • ] Title at Organization
//!       Date: ...
//!       Description: ...
//!       Skills: a, b, c
//!       Type: work
//! ```
//!
//! Blocks are joined with a newline.

use crate::content::{experience::Experience, join_skill_labels, project::Project};

/// Bullet marker opening every record block
pub const BULLET: &str = "[ • ]";

pub const FETCHING_EXPERIENCES: &str = "Fetching experiences...\n";
pub const FETCHING_PROJECTS: &str = "Fetching projects...\n";

pub fn render_experience(exp: &Experience) -> String {
    format!(
        "\n{} {} at {}\n      Date: {}\n      Description: {}\n      Skills: {}\n      Type: {}\n",
        BULLET,
        exp.title,
        exp.organization,
        exp.date,
        exp.description,
        join_skill_labels(exp.skills),
        exp.kind,
    )
}

pub fn render_project(project: &Project) -> String {
    format!(
        "\n{} {}\n      Date: {}\n      Description: {}\n      Skills: {}\n      Type: {}\n      Link: {}\n",
        BULLET,
        project.title,
        project.date,
        project.description,
        join_skill_labels(project.skills),
        project.kind,
        project.link,
    )
}

pub fn render_experiences(experiences: &[Experience]) -> String {
    experiences
        .iter()
        .map(render_experience)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_projects(projects: &[Project]) -> String {
    projects
        .iter()
        .map(render_project)
        .collect::<Vec<_>>()
        .join("\n")
}
