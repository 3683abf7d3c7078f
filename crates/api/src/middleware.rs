use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use ordergate_auth::RequestAuthorizer;

use crate::app::errors;
use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    pub authorizer: RequestAuthorizer,
}

/// Authenticate the request's bearer token and attach the principal.
///
/// Every failure short-circuits to 401 with a bearer challenge; the `detail`
/// text distinguishes a missing credential, an expired token, and an invalid
/// one, without changing the outcome.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers())?;

    let principal = state.authorizer.authenticate_request(token).map_err(|e| {
        tracing::warn!(error = %e, "request authentication failed");
        errors::unauthorized(e.to_string())
    })?;

    req.extensions_mut().insert(PrincipalContext::new(principal));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, Response> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| errors::unauthorized("Not authenticated"))?;

    let header = header
        .to_str()
        .map_err(|_| errors::unauthorized("Not authenticated"))?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| errors::unauthorized("Not authenticated"))?;

    let token = header.trim();
    if token.is_empty() {
        return Err(errors::unauthorized("Not authenticated"));
    }

    Ok(token)
}
