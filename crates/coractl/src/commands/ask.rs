//! One-shot question command.

use anyhow::Result;
use cora_common::{Assistant, ComplianceQuery, Config};

pub async fn run(question: String, use_rag: bool) -> Result<()> {
    let config = Config::from_env()?;
    config.log_summary();

    let assistant = Assistant::from_config(&config);

    let mut query = ComplianceQuery::new(question);
    query.use_rag = use_rag;

    let answer = assistant.answer(query).await;
    crate::render::print_answer(&answer);
    Ok(())
}
