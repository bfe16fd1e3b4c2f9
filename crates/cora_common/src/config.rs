//! Configuration for the compliance assistant.
//!
//! Every setting comes from the process environment (`CORA_*` keys). The
//! credential pair is mandatory; all other fields fall back to defaults.
//! Loaded once at startup and passed by reference from then on.

use crate::error::ConfigError;
use tracing::debug;

pub const ENV_API_KEY_ID: &str = "CORA_API_KEY_ID";
pub const ENV_API_SECRET: &str = "CORA_API_SECRET";
pub const ENV_REGION: &str = "CORA_REGION";
pub const ENV_MODEL_ID: &str = "CORA_MODEL_ID";
pub const ENV_MAX_TOKENS: &str = "CORA_MAX_TOKENS";
pub const ENV_TEMPERATURE: &str = "CORA_TEMPERATURE";
pub const ENV_SEARCH_INDEX_ID: &str = "CORA_SEARCH_INDEX_ID";
pub const ENV_MIN_CONFIDENCE_SCORE: &str = "CORA_MIN_CONFIDENCE_SCORE";
pub const ENV_MODEL_ENDPOINT: &str = "CORA_MODEL_ENDPOINT";
pub const ENV_SEARCH_ENDPOINT: &str = "CORA_SEARCH_ENDPOINT";

const DEFAULT_REGION: &str = "eu-central-1";
const DEFAULT_MODEL_ID: &str = "claude-3-sonnet-v1";
const DEFAULT_MAX_TOKENS: u32 = 2000;
const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_SEARCH_INDEX_ID: &str = "compliance-docs";
const DEFAULT_MIN_CONFIDENCE_SCORE: f64 = 0.3;

/// Immutable runtime settings for one process.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key_id: String,
    pub api_secret: String,
    pub region: String,
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub search_index_id: String,
    /// Loaded for operator visibility; the retrieval filter matches the
    /// HIGH confidence label and does not compare against this threshold.
    pub min_confidence_score: f64,
    pub model_endpoint: String,
    pub search_endpoint: String,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Tests use this to avoid mutating
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key_id = required(&lookup, ENV_API_KEY_ID)?;
        let api_secret = required(&lookup, ENV_API_SECRET)?;

        let region = lookup(ENV_REGION).unwrap_or_else(|| DEFAULT_REGION.to_string());
        let model_id = lookup(ENV_MODEL_ID).unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        let search_index_id =
            lookup(ENV_SEARCH_INDEX_ID).unwrap_or_else(|| DEFAULT_SEARCH_INDEX_ID.to_string());

        let max_tokens = parse_or(&lookup, ENV_MAX_TOKENS, DEFAULT_MAX_TOKENS)?;
        let temperature = parse_or(&lookup, ENV_TEMPERATURE, DEFAULT_TEMPERATURE)?;
        let min_confidence_score = parse_or(
            &lookup,
            ENV_MIN_CONFIDENCE_SCORE,
            DEFAULT_MIN_CONFIDENCE_SCORE,
        )?;

        let model_endpoint = lookup(ENV_MODEL_ENDPOINT)
            .unwrap_or_else(|| format!("https://model-runtime.{}.corp-ai.internal", region));
        let search_endpoint = lookup(ENV_SEARCH_ENDPOINT)
            .unwrap_or_else(|| format!("https://doc-search.{}.corp-ai.internal", region));

        Ok(Self {
            api_key_id,
            api_secret,
            region,
            model_id,
            max_tokens,
            temperature,
            search_index_id,
            min_confidence_score,
            model_endpoint,
            search_endpoint,
        })
    }

    /// Emit a startup summary with credentials masked.
    pub fn log_summary(&self) {
        debug!("region: {}", self.region);
        debug!("model: {}", self.model_id);
        debug!("search index: {}", self.search_index_id);
        debug!("api key id: {}", masked(&self.api_key_id));
        debug!("api secret: {}", masked(&self.api_secret));
    }
}

/// Mask a secret for display, revealing only the last four characters.
pub fn masked(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 4 {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("***{}", tail)
    } else {
        "***".to_string()
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingCredential { key }),
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
            key,
            message: format!("{}", e),
        }),
        None => Ok(default),
    }
}
