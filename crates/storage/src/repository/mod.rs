use async_trait::async_trait;

use crate::error::Result;
use crate::models::{LessonId, LessonScoreRecord, ScoreUpsert, StudentId, UpsertOutcome, UpsertPolicy};

pub mod lesson_score;

pub use lesson_score::ScoreRepository;

/// Storage operations behind the score endpoints.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// All records for a student, in storage order.
    async fn list_for_student(&self, student_id: &StudentId) -> Result<Vec<LessonScoreRecord>>;

    /// Sum of a student's scores, `None` when the student has no records.
    async fn total_for_student(&self, student_id: &StudentId) -> Result<Option<f64>>;

    /// First record for a lesson, in storage order.
    async fn first_for_lesson(&self, lesson_id: &LessonId) -> Result<Option<LessonScoreRecord>>;

    /// Creates the record for the pair or updates it according to `policy`.
    async fn upsert(&self, upsert: &ScoreUpsert, policy: UpsertPolicy) -> Result<UpsertOutcome>;
}
