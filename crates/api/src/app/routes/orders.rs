use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use ordergate_core::OrderId;
use ordergate_store::{NewOrder, OrderPatch};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route(
            "/:id",
            get(get_order).put(update_order).delete(delete_order),
        )
}

/// List orders: non-admins get the subset they own, admins the full set.
/// Ownership is enforced by filtering here, never by an error.
pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    let orders = if principal.principal().is_admin() {
        services.orders.list()
    } else {
        services.orders.list_by_owner(principal.user_id())
    };

    (StatusCode::OK, Json(orders)).into_response()
}

/// Fetch a single order.
///
/// Existence is checked before ownership for single-order operations; the
/// listing path filters instead. Kept asymmetric on purpose.
pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let order_id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::bad_request("invalid order id"),
    };

    let Some(order) = services.orders.get(&order_id) else {
        return errors::not_found("Order not found");
    };

    if !principal.principal().owns_or_admin(&order.user_id) {
        return errors::forbidden("Not authorized to access this order");
    }

    (StatusCode::OK, Json(order)).into_response()
}

/// Create an order owned by the authenticated principal.
pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::CreateOrderRequest>,
) -> axum::response::Response {
    if let Err(detail) = body.validate() {
        return errors::bad_request(detail);
    }

    let order = services.orders.insert(NewOrder {
        user_id: principal.user_id().clone(),
        product_name: body.product_name,
        price: body.price,
        status: body.status.unwrap_or_default(),
        created_at: Utc::now(),
    });

    (StatusCode::CREATED, Json(order)).into_response()
}

/// Update an order's mutable fields (partial update).
pub async fn update_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateOrderRequest>,
) -> axum::response::Response {
    let order_id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::bad_request("invalid order id"),
    };

    let Some(order) = services.orders.get(&order_id) else {
        return errors::not_found("Order not found");
    };

    if !principal.principal().owns_or_admin(&order.user_id) {
        return errors::forbidden("Not authorized to update this order");
    }

    if let Err(detail) = body.validate() {
        return errors::bad_request(detail);
    }

    let patch = OrderPatch {
        product_name: body.product_name,
        price: body.price,
        status: body.status,
    };

    match services.orders.update(&order_id, patch) {
        Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
        None => errors::not_found("Order not found"),
    }
}

/// Delete an order.
pub async fn delete_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let order_id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::bad_request("invalid order id"),
    };

    let Some(order) = services.orders.get(&order_id) else {
        return errors::not_found("Order not found");
    };

    if !principal.principal().owns_or_admin(&order.user_id) {
        return errors::forbidden("Not authorized to delete this order");
    }

    services.orders.delete(&order_id);
    StatusCode::NO_CONTENT.into_response()
}
