//! Canned chat answers
//!
//! Predefined question/answer pairs answered without contacting any model.
//! These double as the suggestion chips shown by the chat widget.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CannedAnswer {
    pub question: &'static str,
    pub answer: &'static str,
}

impl CannedAnswer {
    /// Whole-string, case-insensitive comparison against visitor input
    pub fn matches(&self, message: &str) -> bool {
        self.question.to_lowercase() == message.to_lowercase()
    }
}

const CANNED_ANSWERS: &[CannedAnswer] = &[
    CannedAnswer {
        question: "Who is Danu?",
        answer: "Syahrial Danu is a Fullstack Developer from Indonesia. He graduated with a degree in Informatics from Universitas Budiluhur, specializing in Expert Programming. He started his career as a Mobile Developer intern at PT Media Kreasi Abadi, then grew into a Technical Leader at PT Global Innovation Technology managing 8 projects, and is currently a Mid Software Engineer (Fullstack) at Sprout Digital Labs.",
    },
    CannedAnswer {
        question: "What's your tech stack?",
        answer: "Danu works with a wide range of technologies: Flutter, Next.js, NestJS, and Express.js for his current role. He also has experience with React Native, Spring Boot, Laravel, Golang, Python, Grafana, and AI integrations (Faiss, LLM). He is comfortable working across mobile, web, and backend development.",
    },
    CannedAnswer {
        question: "What projects have you built?",
        answer: "Some notable projects include: SentralPart.com (automotive parts e-commerce), UMKM App (mobile POS with inventory management), E-statement FDR (motorcycle parts management), KejarTugas (project management tool), AI-Powered Grafana Monitoring System, Tukerin (C2C marketplace), and an OCR System. You can check the Projects section for more details!",
    },
    CannedAnswer {
        question: "Are you open for freelance?",
        answer: "Yes! Danu is open for freelance projects, remote work, and business collaborations. For any opportunities, please contact him directly via email at Dhanuwardhan12@gmail.com. He's experienced in fullstack web development, mobile apps, and backend systems.",
    },
    CannedAnswer {
        question: "Where do you currently work?",
        answer: "Danu is currently working as a Mid Software Engineer (Fullstack) at Sprout Digital Labs since February 2025. He works with Flutter, NestJS, and Next.js to build and maintain the platform.",
    },
    CannedAnswer {
        question: "Leadership experience?",
        answer: "At PT Global Innovation Technology (Dec 2023 - Feb 2025), Danu served as Technical Leader managing 8 key projects. He led the development of SentralPart.com as a fullstack developer and middleware engineer, and oversaw teams working on mobile apps, AI initiatives, and internal tools using Waterfall methodology.",
    },
    CannedAnswer {
        question: "How can I contact you?",
        answer: "You can reach Danu through: Email — Dhanuwardhan12@gmail.com, LinkedIn — linkedin.com/in/dhanuwardhana, or GitHub — github.com/Dhanuwrdhn. Feel free to connect!",
    },
];

/// Greeting shown when the chat widget opens
pub const CHAT_GREETING: &str = "Hello! How can I assist you today?";

/// All canned answers in suggestion order
pub fn canned_answers() -> &'static [CannedAnswer] {
    CANNED_ANSWERS
}

/// Find the canned answer whose question equals `message`, ignoring case
pub fn find_canned_answer<'a>(
    table: &'a [CannedAnswer],
    message: &str,
) -> Option<&'a CannedAnswer> {
    table.iter().find(|entry| entry.matches(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let hit = find_canned_answer(canned_answers(), "Who is Danu?").unwrap();
        assert!(hit.answer.starts_with("Syahrial Danu is a Fullstack Developer"));
    }

    #[test]
    fn test_match_ignores_case() {
        let hit = find_canned_answer(canned_answers(), "who is danu?").unwrap();
        assert_eq!(hit.question, "Who is Danu?");

        let hit = find_canned_answer(canned_answers(), "LEADERSHIP EXPERIENCE?").unwrap();
        assert_eq!(hit.question, "Leadership experience?");
    }

    #[test]
    fn test_no_substring_or_fuzzy_match() {
        assert!(find_canned_answer(canned_answers(), "Who is Danu").is_none());
        assert!(find_canned_answer(canned_answers(), "Who is Danu? Tell me more").is_none());
        assert!(find_canned_answer(canned_answers(), " Who is Danu?").is_none());
        assert!(find_canned_answer(canned_answers(), "Tell me a joke").is_none());
    }

    #[test]
    fn test_custom_table() {
        let table = [CannedAnswer {
            question: "Ping?",
            answer: "Pong!",
        }];
        assert_eq!(find_canned_answer(&table, "ping?").unwrap().answer, "Pong!");
        assert!(find_canned_answer(&table, "Who is Danu?").is_none());
    }
}
