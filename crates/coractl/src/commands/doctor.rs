//! Environment diagnosis for the assistant's configuration.
//!
//! Checks every `CORA_*` key, masking secrets, and can write a `.env.sample`
//! template for first-time setup.

use anyhow::Result;
use cora_common::config::{self, masked};
use owo_colors::OwoColorize;
use std::path::Path;

/// One environment key the doctor inspects.
struct CheckedKey {
    key: &'static str,
    description: &'static str,
    required: bool,
    secret: bool,
}

const CHECKED_KEYS: &[CheckedKey] = &[
    CheckedKey {
        key: config::ENV_API_KEY_ID,
        description: "API key id for the model gateway",
        required: true,
        secret: true,
    },
    CheckedKey {
        key: config::ENV_API_SECRET,
        description: "API secret for the model gateway",
        required: true,
        secret: true,
    },
    CheckedKey {
        key: config::ENV_REGION,
        description: "Gateway region (e.g. eu-central-1)",
        required: false,
        secret: false,
    },
    CheckedKey {
        key: config::ENV_MODEL_ID,
        description: "Model identifier",
        required: false,
        secret: false,
    },
    CheckedKey {
        key: config::ENV_MAX_TOKENS,
        description: "Maximum tokens per answer",
        required: false,
        secret: false,
    },
    CheckedKey {
        key: config::ENV_TEMPERATURE,
        description: "Sampling temperature",
        required: false,
        secret: false,
    },
    CheckedKey {
        key: config::ENV_SEARCH_INDEX_ID,
        description: "Document-search index id",
        required: false,
        secret: false,
    },
    CheckedKey {
        key: config::ENV_MIN_CONFIDENCE_SCORE,
        description: "Minimum confidence score for search results",
        required: false,
        secret: false,
    },
    CheckedKey {
        key: config::ENV_MODEL_ENDPOINT,
        description: "Model runtime endpoint override",
        required: false,
        secret: false,
    },
    CheckedKey {
        key: config::ENV_SEARCH_ENDPOINT,
        description: "Document-search endpoint override",
        required: false,
        secret: false,
    },
];

const SAMPLE_ENV: &str = r#"# Cora model gateway credentials
CORA_API_KEY_ID=your-key-id
CORA_API_SECRET=your-secret

# Gateway configuration
CORA_REGION=eu-central-1
CORA_MODEL_ID=claude-3-sonnet-v1
CORA_MAX_TOKENS=2000
CORA_TEMPERATURE=0.7

# Document search (RAG)
CORA_SEARCH_INDEX_ID=compliance-docs
CORA_MIN_CONFIDENCE_SCORE=0.3
"#;

/// One diagnosed key: the configured value, if any.
struct Finding {
    check: &'static CheckedKey,
    value: Option<String>,
}

pub fn run(write_sample: bool) -> Result<()> {
    let findings = diagnose(|key| std::env::var(key).ok());
    let missing_required = print_report(&findings);

    if write_sample {
        write_sample_file(Path::new(".env.sample"))?;
        println!();
        println!("Wrote .env.sample - copy it to .env and fill in your credentials.");
    }

    if missing_required {
        std::process::exit(1);
    }
    Ok(())
}

fn diagnose<F>(lookup: F) -> Vec<Finding>
where
    F: Fn(&str) -> Option<String>,
{
    CHECKED_KEYS
        .iter()
        .map(|check| Finding {
            check,
            value: lookup(check.key).filter(|v| !v.trim().is_empty()),
        })
        .collect()
}

/// Print the diagnosis; returns true when a required key is missing.
fn print_report(findings: &[Finding]) -> bool {
    println!("{}", "Cora environment check".bold());
    println!();

    let mut missing_required = false;

    for finding in findings {
        match &finding.value {
            Some(value) => {
                let shown = if finding.check.secret {
                    masked(value)
                } else {
                    value.clone()
                };
                println!("  {} {} = {}", "ok".green(), finding.check.key, shown);
            }
            None if finding.check.required => {
                missing_required = true;
                println!(
                    "  {} {} - {}",
                    "missing".red(),
                    finding.check.key,
                    finding.check.description
                );
            }
            None => {
                println!(
                    "  {} {} (default applies) - {}",
                    "unset".yellow(),
                    finding.check.key,
                    finding.check.description
                );
            }
        }
    }

    println!();
    if missing_required {
        println!("{}", "Required credentials are missing.".red());
        println!("Steps to fix:");
        println!("  1. Create a .env file next to the binary (or export the variables)");
        println!("  2. Add the missing keys listed above");
        println!("  3. Run 'coractl doctor' again to verify");
    } else {
        println!("{}", "Environment is ready.".green());
    }

    missing_required
}

fn write_sample_file(path: &Path) -> Result<()> {
    std::fs::write(path, SAMPLE_ENV)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_diagnose_flags_missing_credentials() {
        let vars: HashMap<&str, &str> = HashMap::from([(config::ENV_REGION, "us-east-1")]);
        let findings = diagnose(|key| vars.get(key).map(|v| v.to_string()));

        let missing: Vec<&str> = findings
            .iter()
            .filter(|f| f.check.required && f.value.is_none())
            .map(|f| f.check.key)
            .collect();
        assert_eq!(missing, vec![config::ENV_API_KEY_ID, config::ENV_API_SECRET]);
    }

    #[test]
    fn test_diagnose_treats_blank_as_missing() {
        let vars: HashMap<&str, &str> = HashMap::from([(config::ENV_API_KEY_ID, "  ")]);
        let findings = diagnose(|key| vars.get(key).map(|v| v.to_string()));
        let key_id = findings
            .iter()
            .find(|f| f.check.key == config::ENV_API_KEY_ID)
            .unwrap();
        assert!(key_id.value.is_none());
    }

    #[test]
    fn test_sample_env_covers_required_keys_with_placeholders() {
        for check in CHECKED_KEYS.iter().filter(|s| s.required) {
            assert!(SAMPLE_ENV.contains(check.key), "missing {}", check.key);
        }
        assert!(SAMPLE_ENV.contains("your-key-id"));
        assert!(SAMPLE_ENV.contains("your-secret"));
    }

    #[test]
    fn test_write_sample_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env.sample");
        write_sample_file(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, SAMPLE_ENV);
    }
}
