/// HTTP surface for the career chatbot.
///
/// - `POST /api/chatbot`: `{"message": string}` in, guidance plus per-category
///   suggestions out. Any failure becomes a 500 with `{"error": string}`.
/// - `GET /health`: liveness probe.
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};

use career_core::assembler::Recommender;
use career_core::model::CareerAdvice;

use crate::api::{ChatRequest, ErrorResponse, HealthResponse};
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    recommender: Arc<dyn Recommender>,
}

pub fn router(recommender: Arc<dyn Recommender>) -> Router {
    Router::new()
        .route("/api/chatbot", post(chatbot))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(AppState { recommender })
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(error = %self, "chatbot request failed");
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

// The body is read raw so JSON problems surface as our own 500, whatever the
// Content-Type header says.
async fn chatbot(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CareerAdvice>, AppError> {
    let request: ChatRequest = serde_json::from_slice(&body)?;
    debug!(query_len = request.message.len(), "chatbot query");
    let advice = state.recommender.recommend(&request.message)?;
    Ok(Json(advice))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
