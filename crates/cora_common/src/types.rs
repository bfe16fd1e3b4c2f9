//! Core data carriers for the question-answering pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse relevance score the search service attaches to each result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLabel {
    Low,
    Medium,
    High,
}

/// One document excerpt returned by the search service. Ephemeral, produced
/// per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedExcerpt {
    pub text: String,
    pub title: String,
    pub confidence: ConfidenceLabel,
}

/// A single question for the assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceQuery {
    pub question: String,

    /// Whether to enrich the prompt with document-search excerpts.
    #[serde(default = "default_use_rag")]
    pub use_rag: bool,
}

fn default_use_rag() -> bool {
    true
}

impl ComplianceQuery {
    /// Query with retrieval augmentation enabled.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            use_rag: true,
        }
    }

    pub fn without_rag(mut self) -> Self {
        self.use_rag = false;
        self
    }
}

/// Structured result of one pipeline pass.
///
/// `context_sources` is present exactly when `rag_used` is true, i.e. the
/// retrieval step returned at least one high-confidence excerpt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceAnswer {
    pub question: String,
    pub answer: String,
    pub rag_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_sources: Option<Vec<RetrievedExcerpt>>,
    pub timestamp: DateTime<Utc>,
}
