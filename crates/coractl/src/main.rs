//! Cora Control - command-line front end for the compliance assistant.
//!
//! Without a subcommand it starts the interactive question loop.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coractl")]
#[command(about = "Cora - compliance question-answering assistant", long_about = None)]
#[command(version)]
struct Cli {
    /// Subcommand (if not provided, starts the interactive loop)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question and print the answer
    Ask {
        /// The compliance question
        question: String,

        /// Skip document-search augmentation
        #[arg(long)]
        no_rag: bool,
    },

    /// Print the sample-question catalog
    Topics,

    /// Check that the environment is configured correctly
    Doctor {
        /// Write a .env.sample template alongside the diagnosis
        #[arg(long)]
        write_sample: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Quiet by default; RUST_LOG opts into pipeline diagnostics.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ask { question, no_rag }) => commands::ask::run(question, !no_rag).await,
        Some(Commands::Topics) => commands::topics::run(),
        Some(Commands::Doctor { write_sample }) => commands::doctor::run(write_sample),
        None => commands::repl::run().await,
    }
}
