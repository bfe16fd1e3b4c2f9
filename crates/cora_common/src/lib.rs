//! Cora Common - shared pipeline for the Cora compliance assistant.
//!
//! Configuration, the two remote-service clients, prompt construction, and
//! the answer orchestrator used by every front end.

pub mod config;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod prompt;
pub mod retrieval;
pub mod topics;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, GenerationError, RetrievalError};
pub use orchestrator::Assistant;
pub use types::{ComplianceAnswer, ComplianceQuery, ConfidenceLabel, RetrievedExcerpt};
