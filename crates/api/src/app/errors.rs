use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use serde_json::json;

/// Standard error body: `{"detail": <message>}`.
pub fn json_error(status: StatusCode, detail: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "detail": detail.into(),
        })),
    )
        .into_response()
}

pub fn bad_request(detail: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, detail)
}

/// 401 with the bearer challenge header; used for every unauthenticated
/// outcome (missing, expired, malformed, or claims-incomplete credential).
pub fn unauthorized(detail: impl Into<String>) -> axum::response::Response {
    let mut response = json_error(StatusCode::UNAUTHORIZED, detail);
    response.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Bearer"),
    );
    response
}

pub fn forbidden(detail: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::FORBIDDEN, detail)
}

pub fn not_found(detail: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, detail)
}
