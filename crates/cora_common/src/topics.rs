//! Static sample-question catalog for UI suggestion surfaces.
//!
//! Constant for the process lifetime and consumed only by the front ends;
//! the answer pipeline never reads it.

use serde::Serialize;

/// One suggestion category with its example questions, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct TopicCategory {
    pub name: &'static str,
    pub questions: &'static [&'static str],
}

/// The four fixed categories, in display order.
pub const SAMPLE_TOPICS: &[TopicCategory] = &[
    TopicCategory {
        name: "aml",
        questions: &[
            "What are STR reporting requirements?",
            "When should an account be flagged for AML?",
            "What are the key AML red flags?",
            "How long should AML records be retained?",
        ],
    },
    TopicCategory {
        name: "trading",
        questions: &[
            "What is considered circular trading?",
            "What are insider trading regulations?",
            "What constitutes market manipulation?",
            "What are pre-trade compliance checks?",
        ],
    },
    TopicCategory {
        name: "kyc",
        questions: &[
            "What documents are required for KYC?",
            "How often should KYC be updated?",
            "What is enhanced due diligence?",
            "When is simplified due diligence applicable?",
        ],
    },
    TopicCategory {
        name: "reporting",
        questions: &[
            "What are regulatory reporting timelines?",
            "Which transactions require immediate reporting?",
            "What are the penalties for late reporting?",
            "How should suspicious activities be documented?",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_ordered_categories() {
        let names: Vec<&str> = SAMPLE_TOPICS.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["aml", "trading", "kyc", "reporting"]);
    }

    #[test]
    fn test_each_category_has_four_questions() {
        for category in SAMPLE_TOPICS {
            assert_eq!(category.questions.len(), 4, "category {}", category.name);
        }
    }
}
