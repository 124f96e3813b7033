//! HTTP JSON API
//!
//! `POST /api/ask`, `GET /api/health` and `GET /api/sample-questions`, served
//! by axum over a shared [`QaSystem`].

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::answer::Answer;
use crate::error::{Error, Result};
use crate::logging::{LogConfig, Logger, RequestContext};
use crate::qa::{QaSystem, SAMPLE_QUESTIONS};

/// Body of `POST /api/ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub qa: Arc<QaSystem>,
    pub logger: Logger,
}

impl AppState {
    pub fn new(qa: Arc<QaSystem>, logger: Logger) -> Self {
        Self { qa, logger }
    }
}

pub struct HttpServer {
    state: AppState,
    cors_permissive: bool,
}

impl HttpServer {
    pub fn new(qa: Arc<QaSystem>) -> Self {
        Self {
            state: AppState::new(qa, Logger::new(LogConfig::default())),
            cors_permissive: true,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.state.logger = logger;
        self
    }

    pub fn with_cors(mut self, permissive: bool) -> Self {
        self.cors_permissive = permissive;
        self
    }

    /// Create the axum Router
    pub fn router(&self) -> Router {
        let router = Router::new()
            .route("/api/ask", post(ask_question))
            .route("/api/health", get(health_check))
            .route("/api/sample-questions", get(sample_questions))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone());

        if self.cors_permissive {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Start the server on the given address
    pub async fn serve(&self, addr: &str) -> Result<()> {
        info!("Starting web server on http://{}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router())
            .await
            .map_err(|e| Error::Internal(e.to_string()))?;

        Ok(())
    }
}

async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<Answer>> {
    let question = request
        .question
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| Error::InvalidInput("No question provided".to_string()))?;

    let ctx = RequestContext::new().with_operation("ask");
    let span = state.logger.request_span(&ctx);

    let answer = span.in_scope(|| {
        let parsed = state.qa.parse(question);
        let intent = parsed.intent;
        if let Some(intent) = intent {
            span.record("intent", intent.as_str());
        }

        let answer = state.qa.answer_parsed(&parsed);
        span.record("duration_ms", ctx.elapsed_ms());
        state.logger.log_request_complete(
            &ctx,
            intent.map(|i| i.as_str()),
            !answer.sources.is_empty(),
        );
        answer
    });

    Ok(Json(answer))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "system": "Agricultural Q&A System",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn sample_questions() -> Json<Value> {
    Json(json!({ "questions": SAMPLE_QUESTIONS }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let qa = QaSystem::new(Arc::new(DataStore::seeded())).unwrap();
        HttpServer::new(Arc::new(qa)).router()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_blank_question_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ask")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"question": "   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No question provided");
    }
}
