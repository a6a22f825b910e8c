use axum::{Router, routing::post};

use super::handlers::upsert_score;
use crate::error::method_not_allowed;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/:student_id/:lesson_id",
        post(upsert_score).fallback(method_not_allowed),
    )
}
