use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::path::Path;
use tower_http::services::ServeDir;

pub fn router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/ws", get(handlers::ws))
        .route("/api/state", get(handlers::get_state))
        .nest_service("/static", ServeDir::new(public_dir))
        .with_state(state)
}
