use axum::{Json, extract::Extension, response::IntoResponse};

use crate::context::PrincipalContext;

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "ordergate-api",
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Echo the authenticated principal (debug/introspection aid).
pub async fn whoami(Extension(principal): Extension<PrincipalContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "user_id": principal.user_id().to_string(),
        "role": principal.role().as_str(),
    }))
}
