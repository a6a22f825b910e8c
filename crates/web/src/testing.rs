//! In-process score stores for router tests.

use std::sync::Mutex;

use async_trait::async_trait;
use storage::{
    error::{Result, StorageError},
    models::{LessonId, LessonScoreRecord, ScoreUpsert, StudentId, UpsertOutcome, UpsertPolicy},
    repository::ScoreStore,
};

/// What Postgres reports when a `DOUBLE PRECISION` result overflows.
fn numeric_overflow() -> StorageError {
    StorageError::Database(sqlx::Error::Protocol(
        "value out of range: overflow".to_string(),
    ))
}

/// Keeps records in insertion order, one per student/lesson pair.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<LessonScoreRecord>>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn count_pair(&self, student_id: &str, lesson_id: &str) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.student_id.as_str() == student_id && r.lesson_id.as_str() == lesson_id)
            .count()
    }
}

#[async_trait]
impl ScoreStore for MemoryStore {
    async fn list_for_student(&self, student_id: &StudentId) -> Result<Vec<LessonScoreRecord>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| &r.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn total_for_student(&self, student_id: &StudentId) -> Result<Option<f64>> {
        let records = self.records.lock().unwrap();
        let total = records
            .iter()
            .filter(|r| &r.student_id == student_id)
            .map(|r| r.score)
            .reduce(|a, b| a + b);

        match total {
            Some(total) if !total.is_finite() => Err(numeric_overflow()),
            total => Ok(total),
        }
    }

    async fn first_for_lesson(&self, lesson_id: &LessonId) -> Result<Option<LessonScoreRecord>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| &r.lesson_id == lesson_id).cloned())
    }

    async fn upsert(&self, upsert: &ScoreUpsert, policy: UpsertPolicy) -> Result<UpsertOutcome> {
        let mut records = self.records.lock().unwrap();

        if let Some(existing) = records
            .iter_mut()
            .find(|r| r.student_id == upsert.student_id && r.lesson_id == upsert.lesson_id)
        {
            existing.score = policy
                .apply(existing.score, upsert.score)
                .ok_or_else(numeric_overflow)?;
            if let Some(session_id) = &upsert.session_id {
                existing.session_id = Some(session_id.clone());
            }
            return Ok(UpsertOutcome::Updated(existing.clone()));
        }

        let record = LessonScoreRecord {
            id: records.len() as i64 + 1,
            student_id: upsert.student_id.clone(),
            lesson_id: upsert.lesson_id.clone(),
            score: upsert.score,
            session_id: upsert.session_id.clone(),
            date_completed: chrono::Utc::now().naive_utc(),
        };
        records.push(record.clone());

        Ok(UpsertOutcome::Created(record))
    }
}

/// Every call fails the way an unreachable database does.
pub struct FailingStore;

fn unreachable_database() -> StorageError {
    StorageError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ScoreStore for FailingStore {
    async fn list_for_student(&self, _: &StudentId) -> Result<Vec<LessonScoreRecord>> {
        Err(unreachable_database())
    }

    async fn total_for_student(&self, _: &StudentId) -> Result<Option<f64>> {
        Err(unreachable_database())
    }

    async fn first_for_lesson(&self, _: &LessonId) -> Result<Option<LessonScoreRecord>> {
        Err(unreachable_database())
    }

    async fn upsert(&self, _: &ScoreUpsert, _: UpsertPolicy) -> Result<UpsertOutcome> {
        Err(unreachable_database())
    }
}

/// Panics on every call.
pub struct PanickingStore;

#[async_trait]
impl ScoreStore for PanickingStore {
    async fn list_for_student(&self, _: &StudentId) -> Result<Vec<LessonScoreRecord>> {
        panic!("list_for_student exploded")
    }

    async fn total_for_student(&self, _: &StudentId) -> Result<Option<f64>> {
        panic!("total_for_student exploded")
    }

    async fn first_for_lesson(&self, _: &LessonId) -> Result<Option<LessonScoreRecord>> {
        panic!("first_for_lesson exploded")
    }

    async fn upsert(&self, _: &ScoreUpsert, _: UpsertPolicy) -> Result<UpsertOutcome> {
        panic!("upsert exploded")
    }
}
