use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::cognitive::{score_cognitive, CognitiveResult};
use super::learning::{score_learning_style, Algorithm, LearningStyleResult};
use super::scoring::{parse_answers, BehaviorData, Category, InputError, ScoringOptions};
use super::store::{
    AssessmentKind, RepositoryError, RespondentProfile, ResultId, ResultRepository, StoredResult,
};

/// Submission payload accepted by the HTTP layer and the CLI.
///
/// `answers` is kept as raw JSON so a non-array value can be rejected with a
/// dedicated error instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub answers: serde_json::Value,
    #[serde(default)]
    pub behavior_data: Option<BehaviorData>,
    #[serde(default)]
    pub algorithm: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AssessmentPayload {
    LearningStyle(LearningStyleResult),
    Cognitive(CognitiveResult),
}

impl AssessmentPayload {
    fn kind(&self) -> AssessmentKind {
        match self {
            AssessmentPayload::LearningStyle(_) => AssessmentKind::LearningStyle,
            AssessmentPayload::Cognitive(_) => AssessmentKind::Cognitive,
        }
    }

    fn dominant_key(&self) -> Option<String> {
        match self {
            AssessmentPayload::LearningStyle(result) => {
                result.dominant().map(|style| style.key().to_string())
            }
            AssessmentPayload::Cognitive(result) => {
                result.dominant().map(|dimension| dimension.key().to_string())
            }
        }
    }
}

/// Response to a scored submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReceipt {
    pub result_id: ResultId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub result: AssessmentPayload,
}

/// Service composing the scoring engine with the result repository.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    default_algorithm: Algorithm,
}

impl<R> AssessmentService<R>
where
    R: ResultRepository + 'static,
{
    pub fn new(repository: Arc<R>, default_algorithm: Algorithm) -> Self {
        Self {
            repository,
            default_algorithm,
        }
    }

    /// Algorithm named by the request, or the configured default when absent.
    pub fn resolve_algorithm(&self, flag: Option<&str>) -> Algorithm {
        flag.map(Algorithm::from_flag)
            .unwrap_or(self.default_algorithm)
    }

    /// Score a learning-style questionnaire and persist the result.
    pub fn submit_learning_style(
        &self,
        request: AssessmentRequest,
    ) -> Result<AssessmentReceipt, AssessmentServiceError> {
        let answers = parse_answers(&request.answers)?;
        let algorithm = self.resolve_algorithm(request.algorithm.as_deref());
        let options = ScoringOptions::default().with_behavior(request.behavior_data);

        let result = score_learning_style(&answers, algorithm, &options);
        self.persist(request.user_id, AssessmentPayload::LearningStyle(result))
    }

    /// Score a cognitive scenario questionnaire and persist the result.
    pub fn submit_cognitive(
        &self,
        request: AssessmentRequest,
    ) -> Result<AssessmentReceipt, AssessmentServiceError> {
        let answers = parse_answers(&request.answers)?;
        let options = ScoringOptions::default().with_behavior(request.behavior_data);

        let result = score_cognitive(&answers, &options);
        self.persist(request.user_id, AssessmentPayload::Cognitive(result))
    }

    pub fn result(&self, id: &ResultId) -> Result<StoredResult, AssessmentServiceError> {
        let stored = self
            .repository
            .fetch_result(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(stored)
    }

    pub fn profile(&self, user_id: &str) -> Result<RespondentProfile, AssessmentServiceError> {
        let profile = self
            .repository
            .fetch_profile(user_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(profile)
    }

    fn persist(
        &self,
        user_id: Option<String>,
        payload: AssessmentPayload,
    ) -> Result<AssessmentReceipt, AssessmentServiceError> {
        let user_id = user_id
            .map(|user_id| user_id.trim().to_string())
            .filter(|user_id| !user_id.is_empty());
        if let Some(user_id) = user_id.as_deref() {
            self.repository.check_user_id(user_id)?;
        }

        let stored = StoredResult {
            id: ResultId::generate(),
            user_id: user_id.clone(),
            kind: payload.kind(),
            created_at: Utc::now(),
            dominant: payload.dominant_key(),
            payload: serde_json::to_value(&payload).map_err(RepositoryError::from)?,
        };

        let stored = self.repository.save_result(stored)?;
        if stored.user_id.is_some() {
            self.repository.record_profile(&stored)?;
        }

        info!(
            result_id = %stored.id.0,
            kind = ?stored.kind,
            dominant = stored.dominant.as_deref().unwrap_or("none"),
            "assessment result stored"
        );

        Ok(AssessmentReceipt {
            result_id: stored.id,
            user_id,
            result: payload,
        })
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
