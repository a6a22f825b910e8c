use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::ScoreStore;
use crate::error::Result;
use crate::models::{LessonId, LessonScoreRecord, ScoreUpsert, StudentId, UpsertOutcome, UpsertPolicy};

const UPSERT_OVERWRITE: &str = r#"
    INSERT INTO lesson_scores (student_id, lesson_id, score, session_id, date_completed)
    VALUES ($1, $2, $3, $4, NOW())
    ON CONFLICT (student_id, lesson_id)
    DO UPDATE SET
        score = EXCLUDED.score,
        session_id = COALESCE(EXCLUDED.session_id, lesson_scores.session_id)
    RETURNING id, student_id, lesson_id, score, session_id, date_completed,
              (xmax = 0) AS inserted
"#;

const UPSERT_ACCUMULATE: &str = r#"
    INSERT INTO lesson_scores (student_id, lesson_id, score, session_id, date_completed)
    VALUES ($1, $2, $3, $4, NOW())
    ON CONFLICT (student_id, lesson_id)
    DO UPDATE SET
        score = lesson_scores.score + EXCLUDED.score,
        session_id = COALESCE(EXCLUDED.session_id, lesson_scores.session_id)
    RETURNING id, student_id, lesson_id, score, session_id, date_completed,
              (xmax = 0) AS inserted
"#;

fn upsert_statement(policy: UpsertPolicy) -> &'static str {
    match policy {
        UpsertPolicy::Overwrite => UPSERT_OVERWRITE,
        UpsertPolicy::Accumulate => UPSERT_ACCUMULATE,
    }
}

#[derive(FromRow)]
struct UpsertRow {
    #[sqlx(flatten)]
    record: LessonScoreRecord,
    inserted: bool,
}

/// Postgres-backed [`ScoreStore`] over the `lesson_scores` table.
#[derive(Clone)]
pub struct ScoreRepository {
    pool: PgPool,
}

impl ScoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreStore for ScoreRepository {
    async fn list_for_student(&self, student_id: &StudentId) -> Result<Vec<LessonScoreRecord>> {
        let records = sqlx::query_as::<_, LessonScoreRecord>(
            r#"
            SELECT id, student_id, lesson_id, score, session_id, date_completed
            FROM lesson_scores
            WHERE student_id = $1
            ORDER BY id
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn total_for_student(&self, student_id: &StudentId) -> Result<Option<f64>> {
        let total = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT SUM(score) FROM lesson_scores WHERE student_id = $1",
        )
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    async fn first_for_lesson(&self, lesson_id: &LessonId) -> Result<Option<LessonScoreRecord>> {
        let record = sqlx::query_as::<_, LessonScoreRecord>(
            r#"
            SELECT id, student_id, lesson_id, score, session_id, date_completed
            FROM lesson_scores
            WHERE lesson_id = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(lesson_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn upsert(&self, upsert: &ScoreUpsert, policy: UpsertPolicy) -> Result<UpsertOutcome> {
        let row = sqlx::query_as::<_, UpsertRow>(upsert_statement(policy))
            .bind(&upsert.student_id)
            .bind(&upsert.lesson_id)
            .bind(upsert.score)
            .bind(upsert.session_id.as_deref())
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }
}

impl From<UpsertRow> for UpsertOutcome {
    fn from(row: UpsertRow) -> Self {
        if row.inserted {
            UpsertOutcome::Created(row.record)
        } else {
            UpsertOutcome::Updated(row.record)
        }
    }
}
