use storage::{
    error::{Result, StorageError},
    models::{LessonId, LessonScoreRecord},
    repository::ScoreStore,
};

pub const LESSON_NOT_FOUND: &str = "Lesson not found";

/// First recorded score for a lesson. Lessons shared by several students
/// resolve to the oldest record.
pub async fn get_lesson_score(
    store: &dyn ScoreStore,
    lesson_id: &LessonId,
) -> Result<LessonScoreRecord> {
    store
        .first_for_lesson(lesson_id)
        .await?
        .ok_or(StorageError::NotFound(LESSON_NOT_FOUND))
}
