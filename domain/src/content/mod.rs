//! Static portfolio content.
//!
//! Every collection here is `'static` and read-only for the lifetime of the
//! process. Record order only matters for display.

pub mod canned;
pub mod experience;
pub mod profile;
pub mod project;

use serde::Serialize;

/// A labelled skill attached to an experience or project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillTag {
    pub id: u32,
    pub label: &'static str,
}

impl SkillTag {
    pub const fn new(id: u32, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Comma-join skill labels, or `N/A` when the record has none
pub fn join_skill_labels(skills: Option<&[SkillTag]>) -> String {
    match skills {
        Some(skills) => skills
            .iter()
            .map(|s| s.label)
            .collect::<Vec<_>>()
            .join(", "),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_skill_labels() {
        let skills = [SkillTag::new(1, "Kotlin"), SkillTag::new(2, "Kanban")];
        assert_eq!(join_skill_labels(Some(&skills)), "Kotlin, Kanban");
        assert_eq!(join_skill_labels(None), "N/A");
    }
}
