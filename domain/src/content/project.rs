//! Project history

use super::SkillTag;
use serde::Serialize;

/// Distinguishes client work from side projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Paid,
    Personal,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Paid => "paid",
            ProjectKind::Personal => "personal",
        }
    }
}

impl std::fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub skills: Option<&'static [SkillTag]>,
    pub kind: ProjectKind,
    /// External link, `#` when the project has no public page
    pub link: &'static str,
    pub image_url: &'static str,
}

const GIT: &str = "PT Global Innovation Technology";

const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-statement FDR",
        organization: GIT,
        date: "2023-12-01",
        description: "Enhanced and optimized the E-statement system for FDR motorcycle parts distributors in Bandung. Implemented automated monthly statement generation scheduling, improving the efficiency of distributor billing processes. Key improvements included code optimization and automated scheduling for the 1st of each month.",
        skills: Some(&[
            SkillTag::new(1, "Spring Boot"),
            SkillTag::new(2, "Scheduling"),
            SkillTag::new(3, "System Optimization"),
        ]),
        kind: ProjectKind::Paid,
        link: "#",
        image_url: "/photos/e-statement.jpeg",
    },
    Project {
        id: 2,
        title: "KejarTugas",
        organization: GIT,
        date: "2024-01-01",
        description: "KejarTugas is a project management tool designed to streamline task assignments, set deadlines, notify team members, and monitor project progress within a single platform. It offers a comprehensive overview of tasks and projects, enhancing team collaboration and productivity.",
        skills: Some(&[
            SkillTag::new(1, "Next.js"),
            SkillTag::new(2, "React.js"),
            SkillTag::new(3, "React Native"),
            SkillTag::new(4, "Laravel"),
            SkillTag::new(5, "Chakra UI"),
        ]),
        kind: ProjectKind::Paid,
        link: "https://kejartugas.com",
        image_url: "https://drive.google.com/uc?export=view&id=1sFIS_hazQSbNEkzY9IrkQZU-TdhPwOy-",
    },
    Project {
        id: 3,
        title: "AI-Powered Monitoring System",
        organization: GIT,
        date: "2024-04-01",
        description: "Developed an intelligent monitoring system using Grafana integrated with AI capabilities to track and analyze server metrics including memory, RAM, CPU, and storage. Implemented machine learning models for predictive analytics and anomaly detection in system performance.",
        skills: Some(&[
            SkillTag::new(1, "Grafana"),
            SkillTag::new(2, "Python"),
            SkillTag::new(3, "LLM"),
            SkillTag::new(4, "AI Integration"),
        ]),
        kind: ProjectKind::Paid,
        link: "#",
        image_url: "/photos/grafana.jpeg",
    },
    Project {
        id: 4,
        title: "Tukerin",
        organization: GIT,
        date: "2024-08-01",
        description: "Currently developing Tukerin, an innovative C2C (Consumer-to-Consumer) platform that facilitates item-for-item exchanges between users. Unlike traditional e-commerce, Tukerin focuses on enabling direct barter transactions, where users can match and meet to exchange their items. The platform streamlines the bartering process while ensuring a safe and efficient exchange experience.",
        skills: Some(&[
            SkillTag::new(1, "Golang"),
            SkillTag::new(2, "React Native"),
            SkillTag::new(3, "Geolocation"),
            SkillTag::new(4, "Real-time Chat"),
            SkillTag::new(5, "Match System"),
        ]),
        kind: ProjectKind::Paid,
        link: "#",
        image_url: "/photos/tukerin.jpeg",
    },
    Project {
        id: 5,
        title: "AI Customer Service Chatbot",
        organization: GIT,
        date: "2025-04-01",
        description: "Leading the development of an AI-powered customer service chatbot for motorcycle spare parts management. The system efficiently handles order management, generates pre-order tickets, and seamlessly integrates with human CS agents for sales order processing. Implemented advanced NLP capabilities to understand customer inquiries and automate response handling.",
        skills: Some(&[
            SkillTag::new(1, "Python"),
            SkillTag::new(2, "LLM"),
            SkillTag::new(3, "NLP"),
            SkillTag::new(4, "Tech Leadership"),
            SkillTag::new(5, "API Integration"),
        ]),
        kind: ProjectKind::Paid,
        link: "#",
        image_url: "/photos/chatbot.jpeg",
    },
    Project {
        id: 6,
        title: "Invoice OCR System",
        organization: GIT,
        date: "2025-04-01",
        description: "Developing an advanced OCR system to automate invoice processing and SAP data entry. The system utilizes computer vision and machine learning to extract relevant information from invoices and automatically populate SAP systems, significantly reducing manual data entry and improving accuracy.",
        skills: Some(&[
            SkillTag::new(1, "Python"),
            SkillTag::new(2, "OCR"),
            SkillTag::new(3, "Computer Vision"),
            SkillTag::new(4, "SAP Integration"),
            SkillTag::new(5, "Machine Learning"),
        ]),
        kind: ProjectKind::Paid,
        link: "#",
        image_url: "/photos/ocr.jpeg",
    },
    Project {
        id: 7,
        title: "SentralPart.com",
        organization: GIT,
        date: "2025-10-01",
        description: "Led the development of SentralPart.com as Technical Leader, an automotive parts e-commerce platform connecting distributors and retailers. Served as Fullstack Developer and Middleware Engineer, building a scalable backend with Express.js and a modern, responsive frontend with Next.js. Implemented seamless API integrations and middleware solutions to ensure efficient data flow across the platform.",
        skills: Some(&[
            SkillTag::new(1, "Next.js"),
            SkillTag::new(2, "Express.js"),
            SkillTag::new(3, "Middleware"),
            SkillTag::new(4, "Tech Leadership"),
            SkillTag::new(5, "Fullstack Development"),
        ]),
        kind: ProjectKind::Paid,
        link: "https://sentralpart.com",
        image_url: "/photos/LogoSentralPart-Horizontal.svg",
    },
    Project {
        id: 8,
        title: "UMKM App",
        organization: GIT,
        date: "2025-05-01",
        description: "Developed a mobile Point of Sale (POS) application tailored for Indonesian SMEs (UMKM). The app enables business owners to manage sales transactions, track inventory and storage in real-time, and gain insights into their business operations. Built with React Native for a seamless cross-platform mobile experience and Express.js for a robust backend API handling product catalogs, stock management, and transaction processing.",
        skills: Some(&[
            SkillTag::new(1, "React Native"),
            SkillTag::new(2, "Express.js"),
            SkillTag::new(3, "Mobile Development"),
            SkillTag::new(4, "Inventory Management"),
            SkillTag::new(5, "POS System"),
        ]),
        kind: ProjectKind::Paid,
        link: "#",
        image_url: "/photos/umkm-app.jpeg",
    },
];

/// All project records in display order
pub fn projects() -> &'static [Project] {
    PROJECTS
}
