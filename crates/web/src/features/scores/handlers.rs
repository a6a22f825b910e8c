use axum::{
    Json,
    extract::{MatchedPath, Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::{
    dto::score::{MessageResponse, SCORE_CREATED_MESSAGE, SCORE_UPDATED_MESSAGE, UpsertScoreRequest},
    models::{LessonId, ScoreUpsert, StudentId},
};
use validator::Validate;

use crate::error::WebResult;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/{studentId}/{lessonId}",
    params(
        ("studentId" = String, Path, description = "Student identifier"),
        ("lessonId" = String, Path, description = "Lesson identifier")
    ),
    request_body = UpsertScoreRequest,
    responses(
        (status = 200, description = "Score entry created or updated", body = MessageResponse),
        (status = 400, description = "Malformed identifier or request body"),
        (status = 500, description = "Storage failure")
    ),
    tag = "scores"
)]
pub async fn upsert_score(
    State(state): State<AppState>,
    Path((student_id, lesson_id)): Path<(String, String)>,
    payload: Result<Json<UpsertScoreRequest>, JsonRejection>,
) -> WebResult<Response> {
    apply_upsert(&state, student_id, lesson_id, payload).await
}

/// `POST /lesson/{lessonId}`, `/lessons/..` and `/student/..` share their path
/// with the read routes; the literal first segment is the student id.
pub async fn upsert_score_for_literal_student(
    State(state): State<AppState>,
    matched: MatchedPath,
    Path(lesson_id): Path<String>,
    payload: Result<Json<UpsertScoreRequest>, JsonRejection>,
) -> WebResult<Response> {
    let student_id = literal_segment(matched.as_str()).to_string();
    apply_upsert(&state, student_id, lesson_id, payload).await
}

fn literal_segment(route: &str) -> &str {
    route.trim_start_matches('/').split('/').next().unwrap_or_default()
}

async fn apply_upsert(
    state: &AppState,
    student_id: String,
    lesson_id: String,
    payload: Result<Json<UpsertScoreRequest>, JsonRejection>,
) -> WebResult<Response> {
    let student_id = StudentId::parse(student_id)?;
    let lesson_id = LessonId::parse(lesson_id)?;

    let Json(req) = payload?;
    req.validate()?;

    let upsert = ScoreUpsert {
        student_id,
        lesson_id,
        score: req.score,
        session_id: req.session_id,
    };

    let outcome = services::upsert_score(state.store(), &upsert, state.upsert_policy()).await?;

    let message = if outcome.is_created() {
        SCORE_CREATED_MESSAGE
    } else {
        SCORE_UPDATED_MESSAGE
    };

    Ok(Json(MessageResponse::new(message)).into_response())
}
