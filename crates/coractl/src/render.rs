//! Terminal rendering for answers.

use cora_common::ComplianceAnswer;
use owo_colors::OwoColorize;

const RULE: &str = "==================================================";

pub fn print_answer(answer: &ComplianceAnswer) {
    println!();
    println!("{}", "Answer".bold());
    println!("{}", RULE);
    println!("{}", answer.answer);
    println!("{}", RULE);

    if answer.rag_used {
        println!("RAG used: {}", "yes".green());
    } else {
        println!("RAG used: {}", "no".yellow());
    }

    if let Some(sources) = &answer.context_sources {
        println!("Sources:");
        for (i, source) in sources.iter().enumerate() {
            println!("  {}. {}", i + 1, source.title);
        }
    }

    println!("Timestamp: {}", answer.timestamp.to_rfc3339());
}
