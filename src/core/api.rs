//! HTTP API for GPTIQX
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /analyze-conversation - Score a transcript via the gateway
//! - POST /insights - Dashboard insights for a conversation history

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::config::Config;
use crate::core::{build_dashboard, GatewayClient};
use crate::types::{AnalysisError, ConversationRecord, Dashboard, ScoreSnapshot};

/// App state
pub struct AppState {
    pub gateway: GatewayClient,
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub transcript: String,
}

/// Insights request
#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    #[serde(default)]
    pub conversations: Vec<ConversationRecord>,
    /// Subscription flag, owned by the caller
    #[serde(default)]
    pub is_pro: bool,
    /// Reference time for weekly trends (defaults to now)
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub gateway_configured: bool,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<JsonRejection> for AnalysisError {
    fn from(rejection: JsonRejection) -> Self {
        AnalysisError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Create the API router
pub fn create_router(config: &Config) -> Router {
    let state = Arc::new(AppState {
        gateway: GatewayClient::new(config),
    });

    Router::new()
        .route("/health", get(health))
        .route("/analyze-conversation", post(analyze_conversation))
        .route("/insights", post(insights))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        gateway_configured: state.gateway.is_configured(),
    })
}

/// Score a transcript
async fn analyze_conversation(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ScoreSnapshot>, AnalysisError> {
    let Json(req) = body.inspect_err(|e| warn!(error = %e, "rejected analyze request"))?;
    match state.gateway.analyze(&req.transcript).await {
        Ok(scores) => {
            info!(
                user_iq = scores.user_iq,
                gpt_iq = scores.gpt_iq,
                conversation_iq = scores.conversation_iq,
                "analysis complete"
            );
            Ok(Json(scores))
        }
        Err(e) => {
            warn!(error = %e, "analysis failed");
            Err(e)
        }
    }
}

/// Build dashboard insights
async fn insights(
    body: Result<Json<InsightsRequest>, JsonRejection>,
) -> Result<Json<Dashboard>, AnalysisError> {
    let Json(req) = body?;
    let now = req.now.unwrap_or_else(Utc::now);
    Ok(Json(build_dashboard(&req.conversations, now, req.is_pro)))
}

/// Run the API server
pub async fn run_server(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(config);
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!(addr = %config.addr, "GPTIQX API running");
    if config.api_key.is_none() {
        warn!("GPTIQX_API_KEY not set; /analyze-conversation will fail");
    }
    println!("GPTIQX API running on {}", config.addr);
    println!("  GET  /health               - Health check");
    println!("  POST /analyze-conversation - Score a transcript");
    println!("  POST /insights             - Dashboard insights");
    axum::serve(listener, router).await?;
    Ok(())
}
