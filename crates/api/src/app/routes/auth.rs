use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use ordergate_auth::{AuthError, Authenticator, GrantRequest, TokenCodec, grant_types};

use crate::app::{dto, errors};

/// Token-issuance boundary: authenticates a grant, then mints a token.
#[derive(Clone)]
pub struct TokenIssuer {
    pub authenticator: Authenticator,
    pub codec: Arc<TokenCodec>,
}

pub fn router() -> Router {
    Router::new().route("/token", post(issue_token))
}

/// Exchange a password or client_credentials grant for a bearer token.
pub async fn issue_token(
    Extension(issuer): Extension<TokenIssuer>,
    Json(grant): Json<GrantRequest>,
) -> axum::response::Response {
    let principal = match issuer.authenticator.authenticate(&grant) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(grant_type = %grant.grant_type, error = %e, "grant rejected");
            return auth_error_to_response(&grant, e);
        }
    };

    let token = match issuer.codec.issue(&principal.user_id, principal.role) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "token issuance failed");
            return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "Token issuance failed");
        }
    };

    (
        StatusCode::OK,
        Json(dto::TokenResponse::bearer(
            token,
            issuer.codec.ttl().as_secs(),
        )),
    )
        .into_response()
}

fn auth_error_to_response(grant: &GrantRequest, err: AuthError) -> axum::response::Response {
    match err {
        AuthError::BadRequest(detail) => errors::bad_request(detail),
        AuthError::UnsupportedGrant => errors::bad_request("Unsupported grant type"),
        AuthError::InvalidCredentials => {
            // Failed credential checks answer 401 with a bearer challenge;
            // the detail names the grant path that failed.
            let detail = if grant.grant_type == grant_types::PASSWORD {
                "Invalid username or password"
            } else {
                "Invalid client credentials"
            };
            errors::unauthorized(detail)
        }
    }
}
