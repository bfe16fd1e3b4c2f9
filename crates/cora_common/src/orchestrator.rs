//! Answer orchestration: retrieval, prompt construction, generation.
//!
//! One linear pass per question. Retrieval faults degrade to an
//! unaugmented prompt; generation faults either propagate (`try_answer`)
//! or are folded into the answer text (`answer`).

use crate::config::Config;
use crate::error::GenerationError;
use crate::model::{HttpModelClient, TextGenerator};
use crate::prompt::build_prompt;
use crate::retrieval::{DocumentSearch, HttpSearchClient};
use crate::types::{ComplianceAnswer, ComplianceQuery, RetrievedExcerpt};
use chrono::Utc;
use tracing::{info, warn};

/// Number of excerpts folded into the prompt context.
pub const CONTEXT_EXCERPTS: usize = 3;

/// The answer pipeline. Holds the two remote-service backends; safe to
/// share across concurrent callers, no interior mutability.
pub struct Assistant {
    search: Box<dyn DocumentSearch>,
    generator: Box<dyn TextGenerator>,
}

/// Outcome of the retrieval and generation steps for one question.
struct PipelinePass {
    rag_used: bool,
    sources: Option<Vec<RetrievedExcerpt>>,
    outcome: Result<String, GenerationError>,
}

impl Assistant {
    /// Construct with explicit backends.
    pub fn new(search: Box<dyn DocumentSearch>, generator: Box<dyn TextGenerator>) -> Self {
        Self { search, generator }
    }

    /// Wire the HTTP clients from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(HttpSearchClient::new(config)),
            Box::new(HttpModelClient::new(config)),
        )
    }

    /// Run one pipeline pass; the caller always receives an answer record.
    ///
    /// Generation faults are converted, in this one place, into an apology
    /// answer embedding the failure detail. The retrieval fields still
    /// reflect what the retrieval step actually found.
    pub async fn answer(&self, query: ComplianceQuery) -> ComplianceAnswer {
        let pass = self.run(&query).await;

        let answer = match pass.outcome {
            Ok(text) => text,
            Err(e) => {
                warn!("generation failed, answering with error text: {}", e);
                format!(
                    "I apologize, but I encountered an error while processing your question: {}",
                    e
                )
            }
        };

        assemble(query.question, answer, pass.rag_used, pass.sources)
    }

    /// Run one pipeline pass, reporting generation faults to the caller.
    pub async fn try_answer(
        &self,
        query: ComplianceQuery,
    ) -> Result<ComplianceAnswer, GenerationError> {
        let pass = self.run(&query).await;
        let answer = pass.outcome?;
        Ok(assemble(query.question, answer, pass.rag_used, pass.sources))
    }

    async fn run(&self, query: &ComplianceQuery) -> PipelinePass {
        let excerpts = if query.use_rag {
            match self.search.search(&query.question).await {
                Ok(excerpts) => excerpts,
                Err(e) => {
                    warn!("document search failed, continuing without context: {}", e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let context = build_context(&excerpts);
        let rag_used = context.is_some();
        info!("answering (rag_used: {})", rag_used);

        let prompt = build_prompt(&query.question, context.as_deref());
        let outcome = self.generator.generate(&prompt).await;

        PipelinePass {
            rag_used,
            sources: if rag_used { Some(excerpts) } else { None },
            outcome,
        }
    }
}

fn assemble(
    question: String,
    answer: String,
    rag_used: bool,
    sources: Option<Vec<RetrievedExcerpt>>,
) -> ComplianceAnswer {
    ComplianceAnswer {
        question,
        answer,
        rag_used,
        context_sources: sources,
        timestamp: Utc::now(),
    }
}

/// Join the first [`CONTEXT_EXCERPTS`] excerpt texts into a context block,
/// one `- ` line per excerpt. `None` when there is nothing to join.
pub fn build_context(excerpts: &[RetrievedExcerpt]) -> Option<String> {
    if excerpts.is_empty() {
        return None;
    }

    Some(
        excerpts
            .iter()
            .take(CONTEXT_EXCERPTS)
            .map(|e| format!("- {}", e.text))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
