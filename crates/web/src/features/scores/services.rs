use storage::{
    error::Result,
    models::{ScoreUpsert, UpsertOutcome, UpsertPolicy},
    repository::ScoreStore,
};

/// Create the score record for a student/lesson pair, or update it per `policy`
pub async fn upsert_score(
    store: &dyn ScoreStore,
    upsert: &ScoreUpsert,
    policy: UpsertPolicy,
) -> Result<UpsertOutcome> {
    let outcome = store.upsert(upsert, policy).await?;

    tracing::debug!(
        student_id = %upsert.student_id,
        lesson_id = %upsert.lesson_id,
        created = outcome.is_created(),
        policy = %policy,
        "Score upserted"
    );

    Ok(outcome)
}
