use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    dto::score::StudentTotalResponse,
    models::{LessonScoreRecord, StudentId},
};

use crate::error::WebResult;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/lessons/{studentId}",
    params(
        ("studentId" = String, Path, description = "Student identifier")
    ),
    responses(
        (status = 200, description = "All lesson records of the student, possibly empty", body = Vec<LessonScoreRecord>),
        (status = 400, description = "Malformed student identifier"),
        (status = 500, description = "Storage failure")
    ),
    tag = "students"
)]
pub async fn list_student_lessons(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> WebResult<Response> {
    let student_id = StudentId::parse(student_id)?;

    let records = services::list_student_lessons(state.store(), &student_id).await?;

    Ok(Json(records).into_response())
}

#[utoipa::path(
    get,
    path = "/student/{studentId}",
    params(
        ("studentId" = String, Path, description = "Student identifier")
    ),
    responses(
        (status = 200, description = "Cumulative score of the student", body = StudentTotalResponse),
        (status = 400, description = "Malformed student identifier"),
        (status = 404, description = "Student not found or no scores available"),
        (status = 500, description = "Storage failure")
    ),
    tag = "students"
)]
pub async fn get_student_total(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> WebResult<Response> {
    let student_id = StudentId::parse(student_id)?;

    let total_score = services::get_student_total(state.store(), &student_id).await?;

    Ok(Json(StudentTotalResponse {
        student_id,
        total_score,
    })
    .into_response())
}
