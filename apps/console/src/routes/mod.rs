pub mod handlers;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_page))
        // Weight model
        .route("/weights/normalize", post(handlers::handle_normalize))
        .route("/weights/:key/value", post(handlers::handle_set_value))
        .route("/weights/:key/enabled", post(handlers::handle_set_enabled))
        // Flows
        .route("/resume", post(handlers::handle_upload))
        .route("/recommend", post(handlers::handle_recommend))
        // Rendering pipeline
        .route("/validation", post(handlers::handle_toggle_validation))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
