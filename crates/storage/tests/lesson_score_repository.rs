//! Repository tests against a live Postgres.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -p storage -- --ignored`.

use sqlx::PgPool;
use storage::models::{LessonId, ScoreUpsert, StudentId, UpsertPolicy};
use storage::repository::{ScoreRepository, ScoreStore};

fn upsert(student: &str, lesson: &str, score: f64) -> ScoreUpsert {
    ScoreUpsert {
        student_id: StudentId::parse(student).unwrap(),
        lesson_id: LessonId::parse(lesson).unwrap(),
        score,
        session_id: None,
    }
}

async fn record_count(pool: &PgPool, student: &str, lesson: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM lesson_scores WHERE student_id = $1 AND lesson_id = $2")
        .bind(student)
        .bind(lesson)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn upsert_creates_then_overwrites(pool: PgPool) {
    let repo = ScoreRepository::new(pool.clone());

    let created = repo.upsert(&upsert("42", "7", 5.0), UpsertPolicy::Overwrite).await.unwrap();
    assert!(created.is_created());
    assert_eq!(created.record().score, 5.0);

    let updated = repo.upsert(&upsert("42", "7", 3.0), UpsertPolicy::Overwrite).await.unwrap();
    assert!(!updated.is_created());
    assert_eq!(updated.record().score, 3.0);
    assert_eq!(updated.record().id, created.record().id);
    assert_eq!(updated.record().date_completed, created.record().date_completed);

    assert_eq!(record_count(&pool, "42", "7").await, 1);
}

#[sqlx::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn upsert_accumulates(pool: PgPool) {
    let repo = ScoreRepository::new(pool.clone());

    repo.upsert(&upsert("42", "7", 5.0), UpsertPolicy::Accumulate).await.unwrap();
    let updated = repo.upsert(&upsert("42", "7", 3.0), UpsertPolicy::Accumulate).await.unwrap();

    assert_eq!(updated.record().score, 8.0);
    assert_eq!(record_count(&pool, "42", "7").await, 1);
}

#[sqlx::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn upsert_keeps_session_when_omitted(pool: PgPool) {
    let repo = ScoreRepository::new(pool);

    let mut first = upsert("42", "7", 1.0);
    first.session_id = Some("session-a".to_string());
    repo.upsert(&first, UpsertPolicy::Overwrite).await.unwrap();

    let updated = repo.upsert(&upsert("42", "7", 2.0), UpsertPolicy::Overwrite).await.unwrap();
    assert_eq!(updated.record().session_id.as_deref(), Some("session-a"));
}

#[sqlx::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn concurrent_upserts_never_duplicate(pool: PgPool) {
    let repo = ScoreRepository::new(pool.clone());

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.upsert(&upsert("42", "7", i as f64), UpsertPolicy::Overwrite)
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut created = 0;
    for task in tasks {
        if task.await.unwrap().is_created() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(record_count(&pool, "42", "7").await, 1);
}

#[sqlx::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn reads_follow_storage_order(pool: PgPool) {
    let repo = ScoreRepository::new(pool);
    let student = StudentId::parse("42").unwrap();

    assert!(repo.list_for_student(&student).await.unwrap().is_empty());
    assert_eq!(repo.total_for_student(&student).await.unwrap(), None);

    repo.upsert(&upsert("42", "b", 2.0), UpsertPolicy::Overwrite).await.unwrap();
    repo.upsert(&upsert("42", "a", 4.5), UpsertPolicy::Overwrite).await.unwrap();
    repo.upsert(&upsert("9", "a", 1.0), UpsertPolicy::Overwrite).await.unwrap();

    let lessons: Vec<String> = repo
        .list_for_student(&student)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.lesson_id.to_string())
        .collect();
    assert_eq!(lessons, vec!["b", "a"]);

    assert_eq!(repo.total_for_student(&student).await.unwrap(), Some(6.5));

    let first = repo
        .first_for_lesson(&LessonId::parse("a").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.student_id.as_str(), "42");
    assert!(
        repo.first_for_lesson(&LessonId::parse("missing").unwrap())
            .await
            .unwrap()
            .is_none()
    );
}
