//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring and demo data seeding
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and validation
//! - `errors.rs`: consistent error responses

use std::sync::Arc;
use std::time::Duration;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use ordergate_auth::{
    Authenticator, CredentialStore, DEFAULT_TOKEN_TTL, RequestAuthorizer, Role,
    ServiceAccountRecord, TokenCodec, UserRecord,
};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Startup configuration: signing secret, token lifetime, and the static
/// credential tables. Loaded once; every table is immutable afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub users: Vec<UserRecord>,
    pub service_accounts: Vec<ServiceAccountRecord>,
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Demo deployment: the well-known sample credential tables plus the
    /// seeded order/profile fixture.
    pub fn demo(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
            users: vec![
                UserRecord::new("user_a", "password_a", Role::User),
                UserRecord::new("user_b", "password_b", Role::User),
                UserRecord::new("admin", "admin_password", Role::Admin),
            ],
            service_accounts: vec![ServiceAccountRecord::new(
                "service_account",
                "service_secret",
                Role::Admin,
            )],
            seed_demo_data: true,
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: AppConfig) -> Router {
    let credentials = Arc::new(CredentialStore::from_records(
        config.users,
        config.service_accounts,
    ));
    let codec = Arc::new(TokenCodec::with_ttl(
        config.jwt_secret.as_bytes(),
        config.token_ttl,
    ));

    let auth_state = middleware::AuthState {
        authorizer: RequestAuthorizer::new(codec.clone()),
    };
    let issuer = routes::auth::TokenIssuer {
        authenticator: Authenticator::new(credentials),
        codec,
    };

    let services = Arc::new(services::build_services(config.seed_demo_data));

    // Protected routes: require a verified bearer token.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/", get(routes::system::root))
        .route("/health", get(routes::system::health))
        .nest("/auth", routes::auth::router().layer(Extension(issuer)))
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
