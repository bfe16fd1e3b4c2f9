//! API routes for corad.
//!
//! `/v1/answer` accepts a question via POST body or GET query parameters;
//! `/v1/topics` serves the sample-question catalog; `/` serves the browser
//! page.

use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use cora_common::topics::{TopicCategory, SAMPLE_TOPICS};
use cora_common::{ComplianceAnswer, ComplianceQuery};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Answer Routes
// ============================================================================

/// POST body for an answer request.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default = "default_use_rag")]
    pub use_rag: bool,
}

/// Query parameters for the GET variant.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerParams {
    pub question: Option<String>,
    pub use_rag: Option<bool>,
}

fn default_use_rag() -> bool {
    true
}

pub fn answer_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/answer", post(answer_question).get(answer_question_get))
}

async fn answer_question(
    State(state): State<AppStateArc>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<ComplianceAnswer>, (StatusCode, Json<Value>)> {
    respond(state, req.question, req.use_rag).await
}

async fn answer_question_get(
    State(state): State<AppStateArc>,
    Query(params): Query<AnswerParams>,
) -> Result<Json<ComplianceAnswer>, (StatusCode, Json<Value>)> {
    respond(
        state,
        params.question.unwrap_or_default(),
        params.use_rag.unwrap_or(true),
    )
    .await
}

async fn respond(
    state: AppStateArc,
    question: String,
    use_rag: bool,
) -> Result<Json<ComplianceAnswer>, (StatusCode, Json<Value>)> {
    if question.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "question parameter is required" })),
        ));
    }

    info!("[Q]  {}", question);

    let mut query = ComplianceQuery::new(question);
    query.use_rag = use_rag;

    let answer = state.assistant.answer(query).await;
    Ok(Json(answer))
}

// ============================================================================
// Topic Routes
// ============================================================================

pub fn topic_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/topics", get(list_topics))
}

async fn list_topics() -> Json<&'static [TopicCategory]> {
    Json(SAMPLE_TOPICS)
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

// ============================================================================
// UI Routes
// ============================================================================

pub fn ui_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(index))
}

/// Minimal browser front end; all logic stays behind `/v1/answer`.
async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{app, AppState};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request};
    use cora_common::error::{GenerationError, RetrievalError};
    use cora_common::model::TextGenerator;
    use cora_common::retrieval::DocumentSearch;
    use cora_common::types::{ConfidenceLabel, RetrievedExcerpt};
    use cora_common::Assistant;
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    struct StubSearch(Vec<RetrievedExcerpt>);

    #[async_trait]
    impl DocumentSearch for StubSearch {
        async fn search(&self, _query: &str) -> Result<Vec<RetrievedExcerpt>, RetrievalError> {
            Ok(self.0.clone())
        }
    }

    struct StubGenerator(String);

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Ok(self.0.clone())
        }
    }

    fn test_app() -> Router {
        let excerpts = vec![RetrievedExcerpt {
            text: "STRs must be filed with the FIU".to_string(),
            title: "Reporting Rules".to_string(),
            confidence: ConfidenceLabel::High,
        }];
        let assistant = Assistant::new(
            Box::new(StubSearch(excerpts)),
            Box::new(StubGenerator("Answer text".to_string())),
        );
        app(AppState::new(assistant))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_question_is_rejected() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/answer")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn test_post_answer_round_trip() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/answer")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"question": "What are STR reporting requirements?"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let answer: ComplianceAnswer = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(answer.answer, "Answer text");
        assert!(answer.rag_used);
        assert_eq!(answer.context_sources.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_answer_with_query_parameters() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/v1/answer?question=What%20is%20KYC%3F&use_rag=false")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let answer: ComplianceAnswer = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(answer.question, "What is KYC?");
        assert!(!answer.rag_used);
        assert!(answer.context_sources.is_none());
    }

    #[tokio::test]
    async fn test_topics_catalog() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/v1/topics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let categories = json.as_array().unwrap();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0]["name"], "aml");
        assert_eq!(categories[0]["questions"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
    }
}
