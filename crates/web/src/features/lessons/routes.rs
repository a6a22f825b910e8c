use axum::{Router, routing::get};

use super::handlers::get_lesson_score;
use crate::error::method_not_allowed;
use crate::features::scores::handlers::upsert_score_for_literal_student;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/lesson/:lesson_id",
        get(get_lesson_score)
            .post(upsert_score_for_literal_student)
            .fallback(method_not_allowed),
    )
}
