use storage::{
    error::{Result, StorageError},
    models::{LessonScoreRecord, StudentId},
    repository::ScoreStore,
};

pub const STUDENT_NOT_FOUND: &str = "Student not found or no scores available";

/// All lesson records of a student, in storage order
pub async fn list_student_lessons(
    store: &dyn ScoreStore,
    student_id: &StudentId,
) -> Result<Vec<LessonScoreRecord>> {
    store.list_for_student(student_id).await
}

/// Cumulative score of a student across all lessons
pub async fn get_student_total(store: &dyn ScoreStore, student_id: &StudentId) -> Result<f64> {
    store
        .total_for_student(student_id)
        .await?
        .ok_or(StorageError::NotFound(STUDENT_NOT_FOUND))
}
