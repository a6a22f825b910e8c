use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{LessonId, StudentId};

pub const SCORE_CREATED_MESSAGE: &str = "New score entry created successfully";
pub const SCORE_UPDATED_MESSAGE: &str = "Score updated successfully";

/// Request payload for creating or updating a student's lesson score
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertScoreRequest {
    pub score: f64,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Session id must be between 1 and 255 characters"
    ))]
    pub session_id: Option<String>,
}

/// Cumulative score across all of a student's lessons
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentTotalResponse {
    pub student_id: StudentId,
    pub total_score: f64,
}

/// Score recorded for a lesson
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonScoreResponse {
    pub lesson_id: LessonId,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
