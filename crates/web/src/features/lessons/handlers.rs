use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{dto::score::LessonScoreResponse, models::LessonId};

use crate::error::WebResult;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/lesson/{lessonId}",
    params(
        ("lessonId" = String, Path, description = "Lesson identifier")
    ),
    responses(
        (status = 200, description = "Score of the first record for the lesson", body = LessonScoreResponse),
        (status = 400, description = "Malformed lesson identifier"),
        (status = 404, description = "Lesson not found"),
        (status = 500, description = "Storage failure")
    ),
    tag = "lessons"
)]
pub async fn get_lesson_score(
    State(state): State<AppState>,
    Path(lesson_id): Path<String>,
) -> WebResult<Response> {
    let lesson_id = LessonId::parse(lesson_id)?;

    let record = services::get_lesson_score(state.store(), &lesson_id).await?;

    Ok(Json(LessonScoreResponse {
        lesson_id,
        score: record.score,
    })
    .into_response())
}
