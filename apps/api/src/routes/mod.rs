pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::criteria::handlers::handle_extract_criteria;
use crate::report::handlers::{handle_download, handle_score_resume};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/extract_criteria", post(handle_extract_criteria))
        .route("/score_resume", post(handle_score_resume))
        .route("/download/:filename", get(handle_download))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
