//! Store statistics endpoint

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;

/// GET /api/stats - Event store statistics
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Response {
    match state.store.stats() {
        Ok(stats) => Json(ApiResponse::new(stats)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::internal(e.to_string())),
        )
            .into_response(),
    }
}
