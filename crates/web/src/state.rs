use std::sync::Arc;

use storage::{models::UpsertPolicy, repository::ScoreStore};

/// Shared handler state: the injected score store and the configured upsert policy.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ScoreStore>,
    upsert_policy: UpsertPolicy,
}

impl AppState {
    pub fn new(store: Arc<dyn ScoreStore>, upsert_policy: UpsertPolicy) -> Self {
        Self {
            store,
            upsert_policy,
        }
    }

    pub fn store(&self) -> &dyn ScoreStore {
        self.store.as_ref()
    }

    pub fn upsert_policy(&self) -> UpsertPolicy {
        self.upsert_policy
    }
}
