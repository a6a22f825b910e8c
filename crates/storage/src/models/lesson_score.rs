use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{LessonId, StudentId};

/// One student's score on one lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LessonScoreRecord {
    pub id: i64,
    pub student_id: StudentId,
    pub lesson_id: LessonId,
    pub score: f64,
    pub session_id: Option<String>,
    pub date_completed: chrono::NaiveDateTime,
}

/// Input of a create-or-update for a student/lesson pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreUpsert {
    pub student_id: StudentId,
    pub lesson_id: LessonId,
    pub score: f64,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    Created(LessonScoreRecord),
    Updated(LessonScoreRecord),
}

impl UpsertOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn record(&self) -> &LessonScoreRecord {
        match self {
            Self::Created(record) | Self::Updated(record) => record,
        }
    }
}
