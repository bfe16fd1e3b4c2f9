//! Print the sample-question catalog.

use anyhow::Result;
use cora_common::topics::SAMPLE_TOPICS;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    for category in SAMPLE_TOPICS {
        println!("{}", category.name.to_uppercase().bold());
        for question in category.questions {
            println!("  - {}", question);
        }
        println!();
    }
    Ok(())
}
