use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier wrapper for stored results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResultId(pub String);

impl ResultId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssessmentKind {
    LearningStyle,
    Cognitive,
}

/// A computed result as written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResult {
    pub id: ResultId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub kind: AssessmentKind,
    pub created_at: DateTime<Utc>,
    /// Wire key of the dominant category, if one was determined.
    pub dominant: Option<String>,
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEntry {
    pub result_id: ResultId,
    pub kind: AssessmentKind,
    pub dominant: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Running profile for a respondent: latest result, history, and counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondentProfile {
    pub user_id: String,
    pub latest_result_id: Option<ResultId>,
    pub latest_dominant: Option<String>,
    /// Oldest first.
    pub history: Vec<ProfileEntry>,
    pub assessments_taken: u32,
    pub counts_by_kind: BTreeMap<AssessmentKind, u32>,
    pub updated_at: DateTime<Utc>,
}

impl RespondentProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            latest_result_id: None,
            latest_dominant: None,
            history: Vec::new(),
            assessments_taken: 0,
            counts_by_kind: BTreeMap::new(),
            updated_at: Utc::now(),
        }
    }

    /// Fold a stored result into the profile, keeping at most `history_limit`
    /// history entries.
    pub fn record(&mut self, result: &StoredResult, history_limit: usize) {
        self.latest_result_id = Some(result.id.clone());
        self.latest_dominant = result.dominant.clone();
        self.history.push(ProfileEntry {
            result_id: result.id.clone(),
            kind: result.kind,
            dominant: result.dominant.clone(),
            created_at: result.created_at,
        });
        if self.history.len() > history_limit {
            let excess = self.history.len() - history_limit;
            self.history.drain(..excess);
        }
        self.assessments_taken = self.assessments_taken.saturating_add(1);
        *self.counts_by_kind.entry(result.kind).or_insert(0) += 1;
        self.updated_at = result.created_at;
    }
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait ResultRepository: Send + Sync {
    fn save_result(&self, result: StoredResult) -> Result<StoredResult, RepositoryError>;
    fn fetch_result(&self, id: &ResultId) -> Result<Option<StoredResult>, RepositoryError>;
    /// Append `result` to its respondent's profile, creating the profile if needed.
    fn record_profile(&self, result: &StoredResult) -> Result<RespondentProfile, RepositoryError>;
    fn fetch_profile(&self, user_id: &str) -> Result<Option<RespondentProfile>, RepositoryError>;

    /// Reject respondent ids this store cannot key a profile by.
    fn check_user_id(&self, user_id: &str) -> Result<(), RepositoryError> {
        if user_id.trim().is_empty() {
            return Err(RepositoryError::InvalidKey(user_id.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored document could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
