//! Work and education history

use super::SkillTag;
use serde::Serialize;

/// Distinguishes employment from education entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Work,
    Education,
}

impl ExperienceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceKind::Work => "work",
            ExperienceKind::Education => "education",
        }
    }
}

impl std::fmt::Display for ExperienceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the experience timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub id: u32,
    pub title: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub skills: Option<&'static [SkillTag]>,
    pub kind: ExperienceKind,
}

const EXPERIENCES: &[Experience] = &[
    Experience {
        id: 2,
        title: "Software Engineer & Tech Lead",
        organization: "PT Global Information Technology",
        date: "Dec 2023 - Present",
        description: "Tech Lead managing six key projects:\n\
            - Estatement (motorcycle parts management system)\n\
            - Kejar Tugas (internal project management tool)\n\
            - AI-powered Grafana monitoring system\n\
            - Tukerin (C2C marketplace MVP)\n\
            - Customer service chatbot (AI initiative)\n\
            - OCR system (AI initiative)\n\
            \n\
            Demonstrated excellence in both technical leadership and hands-on development\n\
            using Waterfall methodology.",
        skills: Some(&[
            SkillTag::new(1, "Spring Boot"),
            SkillTag::new(2, "Laravel"),
            SkillTag::new(3, "React.js"),
            SkillTag::new(4, "React Native"),
            SkillTag::new(5, "Golang"),
            SkillTag::new(6, "Python"),
            SkillTag::new(7, "Grafana"),
            SkillTag::new(8, "AI Integration"),
            SkillTag::new(9, "Faiss"),
            SkillTag::new(10, "Tech Leadership"),
        ]),
        kind: ExperienceKind::Work,
    },
    Experience {
        id: 1,
        title: "IT Intern Mobile Developer",
        organization: "PT Media Kreasi Abadi",
        date: "Feb 2022 - Jul 2022",
        description: "Developed EduFams, a mobile application serving the Balikpapan community,\n\
            from initial development to successful PlayStore publication.\n\
            \n\
            Gained hands-on experience in the complete mobile app development lifecycle,\n\
            including requirement analysis, development, testing, and deployment.\n\
            \n\
            Utilized Agile methodology with Kanban for efficient project management.",
        skills: Some(&[
            SkillTag::new(1, "Android Studio"),
            SkillTag::new(2, "Kotlin"),
            SkillTag::new(3, "Kanban"),
        ]),
        kind: ExperienceKind::Work,
    },
    Experience {
        id: 3,
        title: "Bachelors Degree in Informatics",
        organization: "Universitas Budiluhur",
        date: "2019 - 2023",
        description: "Graduated with a degree in Informatics Engineering,\n\
            specializing in Expert Programming.\n\
            \n\
            Gained comprehensive knowledge in:\n\
            - Game development\n\
            - Algorithms\n\
            - Mobile applications\n\
            - Web development\n\
            - Machine learning\n\
            \n\
            Completed various hands-on projects across multiple programming domains.",
        skills: Some(&[
            SkillTag::new(1, "Algorithms"),
            SkillTag::new(2, "Mobile Applications"),
            SkillTag::new(3, "Web Development"),
            SkillTag::new(4, "Machine Learning"),
        ]),
        kind: ExperienceKind::Education,
    },
];

/// All experience records in display order
pub fn experiences() -> &'static [Experience] {
    EXPERIENCES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experiences_cover_work_and_education() {
        let all = experiences();
        assert_eq!(all.len(), 3);
        assert!(all.iter().any(|e| e.kind == ExperienceKind::Work));
        assert!(all.iter().any(|e| e.kind == ExperienceKind::Education));
    }

    #[test]
    fn test_description_keeps_line_structure() {
        let lead = &experiences()[0];
        assert!(lead.description.starts_with("Tech Lead managing six key projects:\n- Estatement"));
        assert!(lead.description.contains("\n\nDemonstrated excellence"));
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ExperienceKind::Education).unwrap();
        assert_eq!(json, "\"education\"");
    }
}
