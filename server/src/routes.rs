//! Route definitions for the user API

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::handlers::*;

// User routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/v1/users", post(create_user).get(list_users))
        .route("/user/v1/transfer", post(transfer))
}

/// Full application router with request tracing
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(user_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
