use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use ordergate_core::UserId;
use ordergate_store::ProfilePatch;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new().route("/:user_id/profile", get(get_profile).put(update_profile))
}

/// Fetch a user's profile.
///
/// The owner is named by the path, so ownership is checked before the store
/// is consulted — the opposite ordering from single-order operations, and an
/// unauthorized caller learns nothing about whether the profile exists.
pub async fn get_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(user_id): Path<String>,
) -> axum::response::Response {
    let owner = UserId::new(user_id);

    if !principal.principal().owns_or_admin(&owner) {
        return errors::forbidden("Not authorized to access this profile");
    }

    match services.profiles.get(&owner) {
        Some(profile) => (StatusCode::OK, Json(profile)).into_response(),
        None => errors::not_found("Profile not found"),
    }
}

/// Update a user's profile (partial update).
pub async fn update_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(user_id): Path<String>,
    Json(body): Json<dto::UpdateProfileRequest>,
) -> axum::response::Response {
    let owner = UserId::new(user_id);

    if !principal.principal().owns_or_admin(&owner) {
        return errors::forbidden("Not authorized to update this profile");
    }

    let patch = ProfilePatch {
        email: body.email,
        full_name: body.full_name,
        phone: body.phone,
        address: body.address,
    };

    match services.profiles.update(&owner, patch) {
        Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
        None => errors::not_found("Profile not found"),
    }
}
