//! Admin endpoints for the dataset cache

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::AppState;

/// Query params for admin operations
#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    /// Admin key for authorization (simple protection)
    pub key: Option<String>,
}

/// Response for cache operations
#[derive(Debug, Serialize)]
pub struct ClearCacheResponse {
    pub success: bool,
    pub message: String,
}

fn validate_admin_key(state: &AppState, provided_key: Option<&str>) -> bool {
    match provided_key {
        Some(key) => key == state.config.admin_key,
        None => false,
    }
}

/// POST /api/admin/cache/clear - Drop the cached datasets
pub async fn clear_cache(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AdminQuery>,
) -> Result<Json<ClearCacheResponse>, (StatusCode, Json<serde_json::Value>)> {
    if !validate_admin_key(&state, query.key.as_deref()) {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "Invalid or missing admin key" })),
        ));
    }

    state.service.clear_cache().await;
    tracing::info!("Dataset cache cleared via admin endpoint");

    Ok(Json(ClearCacheResponse {
        success: true,
        message: "Dataset cache cleared".to_string(),
    }))
}
