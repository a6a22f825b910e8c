pub mod identifier;
pub mod lesson_score;
pub mod upsert_policy;

pub use identifier::{InvalidIdentifier, LessonId, StudentId};
pub use lesson_score::{LessonScoreRecord, ScoreUpsert, UpsertOutcome};
pub use upsert_policy::UpsertPolicy;
