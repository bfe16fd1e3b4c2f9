//! Client for the managed document-search service.
//!
//! Sends a free-text query against the configured index and keeps only the
//! results the service labeled HIGH confidence, in their original order.

use crate::config::Config;
use crate::error::RetrievalError;
use crate::types::{ConfidenceLabel, RetrievedExcerpt};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Upper bound on candidate results requested per query.
pub const PAGE_SIZE: usize = 5;

const SEARCH_TIMEOUT_SECS: u64 = 10;

/// Document-search backend seam.
#[async_trait]
pub trait DocumentSearch: Send + Sync {
    /// Fetch high-confidence excerpts for a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<RetrievedExcerpt>, RetrievalError>;
}

/// HTTP client for the hosted search index.
pub struct HttpSearchClient {
    http: reqwest::Client,
    endpoint: String,
    index_id: String,
    api_key_id: String,
    api_secret: String,
}

impl HttpSearchClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(SEARCH_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            endpoint: config.search_endpoint.clone(),
            index_id: config.search_index_id.clone(),
            api_key_id: config.api_key_id.clone(),
            api_secret: config.api_secret.clone(),
        }
    }
}

#[async_trait]
impl DocumentSearch for HttpSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<RetrievedExcerpt>, RetrievalError> {
        let body = serde_json::json!({
            "index_id": self.index_id,
            "query_text": query,
            "page_size": PAGE_SIZE,
        });

        let response = self
            .http
            .post(format!("{}/v1/query", self.endpoint))
            .header("x-api-key-id", &self.api_key_id)
            .bearer_auth(&self.api_secret)
            .json(&body)
            .send()
            .await
            .map_err(|e| RetrievalError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RetrievalError::Status(response.status().as_u16()));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| RetrievalError::Malformed(e.to_string()))?;

        let excerpts = parse_search_response(&json)?;
        debug!(
            "search for {:?} kept {} high-confidence excerpts",
            query,
            excerpts.len()
        );
        Ok(excerpts)
    }
}

/// Extract result items from the search response envelope, keeping only
/// HIGH-confidence matches and at most [`PAGE_SIZE`] candidates.
pub fn parse_search_response(json: &Value) -> Result<Vec<RetrievedExcerpt>, RetrievalError> {
    let items = json
        .get("items")
        .and_then(|v| v.as_array())
        .ok_or_else(|| RetrievalError::Malformed("missing items array".to_string()))?;

    let candidates: Vec<RetrievedExcerpt> =
        items.iter().take(PAGE_SIZE).filter_map(parse_item).collect();

    Ok(filter_high_confidence(candidates))
}

fn parse_item(item: &Value) -> Option<RetrievedExcerpt> {
    let confidence = match item.get("confidence").and_then(|v| v.as_str()) {
        Some("HIGH") => ConfidenceLabel::High,
        Some("MEDIUM") => ConfidenceLabel::Medium,
        Some("LOW") => ConfidenceLabel::Low,
        _ => return None,
    };

    Some(RetrievedExcerpt {
        text: item
            .get("excerpt")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        title: item
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        confidence,
    })
}

/// Keep only excerpts labeled HIGH, preserving relative order. The label
/// match is exact; MEDIUM and LOW are discarded unconditionally.
pub fn filter_high_confidence(excerpts: Vec<RetrievedExcerpt>) -> Vec<RetrievedExcerpt> {
    excerpts
        .into_iter()
        .filter(|e| e.confidence == ConfidenceLabel::High)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excerpt(text: &str, confidence: ConfidenceLabel) -> RetrievedExcerpt {
        RetrievedExcerpt {
            text: text.to_string(),
            title: format!("{} title", text),
            confidence,
        }
    }

    #[test]
    fn test_filter_keeps_only_high_in_order() {
        let excerpts = vec![
            excerpt("first", ConfidenceLabel::High),
            excerpt("skip-medium", ConfidenceLabel::Medium),
            excerpt("second", ConfidenceLabel::High),
            excerpt("skip-low", ConfidenceLabel::Low),
            excerpt("third", ConfidenceLabel::High),
        ];
        let kept = filter_high_confidence(excerpts);
        let texts: Vec<&str> = kept.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_filter_can_empty_the_result() {
        let excerpts = vec![
            excerpt("a", ConfidenceLabel::Medium),
            excerpt("b", ConfidenceLabel::Low),
        ];
        assert!(filter_high_confidence(excerpts).is_empty());
    }

    #[test]
    fn test_parse_response_filters_and_orders() {
        let json = serde_json::json!({
            "items": [
                { "excerpt": "record retention is five years", "title": "AML Act", "confidence": "HIGH" },
                { "excerpt": "weak match", "title": "Misc", "confidence": "LOW" },
                { "excerpt": "STR filing window", "title": "Reporting Rules", "confidence": "HIGH" },
            ]
        });
        let excerpts = parse_search_response(&json).unwrap();
        assert_eq!(excerpts.len(), 2);
        assert_eq!(excerpts[0].text, "record retention is five years");
        assert_eq!(excerpts[1].title, "Reporting Rules");
    }

    #[test]
    fn test_parse_response_caps_candidates_at_page_size() {
        let items: Vec<Value> = (0..8)
            .map(|i| {
                serde_json::json!({
                    "excerpt": format!("excerpt {}", i),
                    "title": format!("title {}", i),
                    "confidence": "HIGH",
                })
            })
            .collect();
        let json = serde_json::json!({ "items": items });
        let excerpts = parse_search_response(&json).unwrap();
        assert_eq!(excerpts.len(), PAGE_SIZE);
        assert_eq!(excerpts.last().unwrap().text, "excerpt 4");
    }

    #[test]
    fn test_parse_response_skips_unlabeled_items() {
        let json = serde_json::json!({
            "items": [
                { "excerpt": "no label", "title": "t" },
                { "excerpt": "good", "title": "t", "confidence": "HIGH" },
            ]
        });
        let excerpts = parse_search_response(&json).unwrap();
        assert_eq!(excerpts.len(), 1);
        assert_eq!(excerpts[0].text, "good");
    }

    #[test]
    fn test_parse_response_rejects_missing_items() {
        let err = parse_search_response(&serde_json::json!({})).unwrap_err();
        assert!(matches!(err, RetrievalError::Malformed(_)));
    }
}
