use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    diagnostics::{Diagnostics, DiagnosticsReport},
    engine::ChatEngine,
    types::ChatOutcome,
};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
    pub diagnostics: Arc<Diagnostics>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

pub fn router(state: AppState) -> Router {
    // Wildcard CORS so a separately hosted frontend can call the API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/api/hello", get(hello))
        .route("/test", get(test_database))
        .route("/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn index() -> Json<Value> {
    Json(json!({ "message": "Hello from the BinBuddy backend!" }))
}

async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}

async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(state.diagnostics.report().await)
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatOutcome>, (StatusCode, String)> {
    if request.message.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "message must not be empty".to_owned(),
        ));
    }

    let request_id = format!("http-{}", Utc::now().timestamp_millis());
    let outcome = state.engine.classify_and_reply(&request.message);
    info!(%request_id, allowed = outcome.allowed, "chat message classified");

    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{Json, extract::State, http::StatusCode};

    use crate::{diagnostics::Diagnostics, engine::ChatEngine};

    use super::{AppState, ChatRequest, chat, test_database};

    fn state() -> AppState {
        AppState {
            engine: Arc::new(ChatEngine::default()),
            diagnostics: Arc::new(Diagnostics::default()),
        }
    }

    #[tokio::test]
    async fn chat_rejects_empty_message() {
        let result = chat(
            State(state()),
            Json(ChatRequest {
                message: String::new(),
            }),
        )
        .await;

        let (status, _) = result.err().expect("empty message should be rejected");
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn chat_returns_outcome_for_valid_message() {
        let result = chat(
            State(state()),
            Json(ChatRequest {
                message: "When is my recycling pickup?".to_owned(),
            }),
        )
        .await;

        let Json(outcome) = result.expect("valid message should succeed");
        assert!(outcome.allowed);
        assert!(outcome.reply.starts_with("Curbside pickup days vary by location"));
        assert_eq!(outcome.reasons.len(), 1);
    }

    #[tokio::test]
    async fn chat_refuses_out_of_scope_message() {
        let result = chat(
            State(state()),
            Json(ChatRequest {
                message: "Should I refinance my mortgage?".to_owned(),
            }),
        )
        .await;

        let Json(outcome) = result.expect("out-of-scope message still succeeds");
        assert!(!outcome.allowed);
        assert!(outcome.reply.contains("waste management topics only"));
    }

    #[tokio::test]
    async fn test_endpoint_reports_without_database() {
        let Json(report) = test_database(State(state())).await;
        assert_eq!(report.backend, "running");
        assert_eq!(report.connection_status, "not connected");
    }
}
