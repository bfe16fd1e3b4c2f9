//! Interactive question loop.
//!
//! Reads one question per line; `quit`, `exit`, or `q` ends the session,
//! blank lines are skipped, and retrieval augmentation is always on.

use anyhow::Result;
use cora_common::{Assistant, ComplianceQuery, Config};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    config.log_summary();

    let assistant = Assistant::from_config(&config);

    println!("{}", "Cora - Compliance Assistant".bold());
    println!("Ask a compliance question, or type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            Some(Err(e)) => {
                eprintln!("Error reading input: {}", e);
                continue;
            }
            None => break, // EOF
        };

        if input.is_empty() {
            continue;
        }

        if matches!(input.to_lowercase().as_str(), "quit" | "exit" | "q") {
            println!("Goodbye!");
            break;
        }

        println!("{}", "Working on it...".dimmed());
        let answer = assistant.answer(ComplianceQuery::new(input)).await;
        crate::render::print_answer(&answer);
        println!();
    }

    Ok(())
}
