//! Error taxonomy for the compliance pipeline.

use thiserror::Error;

/// Fatal configuration problems, raised once at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required credential {key} - set it in the environment or a .env file")]
    MissingCredential { key: &'static str },

    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Faults contacting the document-search service.
#[derive(Debug, Clone, Error)]
pub enum RetrievalError {
    #[error("search request failed: {0}")]
    Request(String),

    #[error("search service returned status {0}")]
    Status(u16),

    #[error("malformed search response: {0}")]
    Malformed(String),
}

/// Faults contacting the generation service.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Request(String),

    #[error("generation service returned status {0}")]
    Status(u16),

    #[error("malformed generation response: {0}")]
    Malformed(String),

    #[error("generation service returned no content")]
    EmptyResponse,
}
