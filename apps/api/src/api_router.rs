use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, put};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

pub fn build_router(app_state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/roles", get(handlers::members::list_roles_handler))
        .route(
            "/api/members/{user_id}/assignable-roles",
            get(handlers::members::assignable_roles_handler),
        )
        .route(
            "/api/members/{user_id}/role-management",
            get(handlers::members::role_management_handler),
        )
        .route(
            "/api/members/{user_id}/role",
            put(handlers::members::assign_member_role_handler),
        )
        .route_layer(from_fn(middleware::require_acting_member));

    Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
