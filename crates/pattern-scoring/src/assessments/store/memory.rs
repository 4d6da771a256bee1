use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::repository::{
    RepositoryError, RespondentProfile, ResultId, ResultRepository, StoredResult,
};

/// Process-local store used by tests and the one-shot CLI.
#[derive(Clone)]
pub struct InMemoryResultStore {
    results: Arc<Mutex<HashMap<ResultId, StoredResult>>>,
    profiles: Arc<Mutex<HashMap<String, RespondentProfile>>>,
    history_limit: usize,
}

impl Default for InMemoryResultStore {
    fn default() -> Self {
        Self::with_history_limit(50)
    }
}

impl InMemoryResultStore {
    pub fn with_history_limit(history_limit: usize) -> Self {
        Self {
            results: Arc::default(),
            profiles: Arc::default(),
            history_limit: history_limit.max(1),
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.results).map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("in-memory store mutex poisoned".to_string()))
}

impl ResultRepository for InMemoryResultStore {
    fn save_result(&self, result: StoredResult) -> Result<StoredResult, RepositoryError> {
        lock(&self.results)?.insert(result.id.clone(), result.clone());
        Ok(result)
    }

    fn fetch_result(&self, id: &ResultId) -> Result<Option<StoredResult>, RepositoryError> {
        Ok(lock(&self.results)?.get(id).cloned())
    }

    fn record_profile(&self, result: &StoredResult) -> Result<RespondentProfile, RepositoryError> {
        let user_id = result
            .user_id
            .clone()
            .filter(|user_id| !user_id.trim().is_empty())
            .ok_or_else(|| RepositoryError::InvalidKey(String::new()))?;

        let mut guard = lock(&self.profiles)?;
        let profile = guard
            .entry(user_id.clone())
            .or_insert_with(|| RespondentProfile::new(user_id));
        profile.record(result, self.history_limit);
        Ok(profile.clone())
    }

    fn fetch_profile(&self, user_id: &str) -> Result<Option<RespondentProfile>, RepositoryError> {
        Ok(lock(&self.profiles)?.get(user_id).cloned())
    }
}
