use axum::{Router, routing::get};

use super::handlers::{get_student_total, list_student_lessons};
use crate::error::method_not_allowed;
use crate::features::scores::handlers::upsert_score_for_literal_student;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/lessons/:student_id",
            get(list_student_lessons)
                .post(upsert_score_for_literal_student)
                .fallback(method_not_allowed),
        )
        .route(
            "/student/:student_id",
            get(get_student_total)
                .post(upsert_score_for_literal_student)
                .fallback(method_not_allowed),
        )
}
