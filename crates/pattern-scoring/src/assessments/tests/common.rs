use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::assessments::learning::Algorithm;
use crate::assessments::store::{
    InMemoryResultStore, RepositoryError, RespondentProfile, ResultId, ResultRepository,
    StoredResult,
};
use crate::assessments::{assessment_router, AssessmentRequest, AssessmentService};

pub(super) fn learning_answers() -> Value {
    json!([
        { "category": "visual", "weight": 2, "responseTime": 5000 },
        { "category": "visual", "weight": 1, "responseTime": 4000 },
        { "category": "auditory", "weight": 1, "responseTime": 9000 },
        { "category": "kinesthetic", "responseTime": 1000 },
        { "category": "visual", "questionCategory": "memory", "responseTime": 6000 }
    ])
}

pub(super) fn scenario_answers() -> Value {
    json!([
        { "pattern": "tree_bark", "dimension": "texture", "responseTime": 4000 },
        { "pattern": "city_map", "dimension": "spatial", "responseTime": 5000 },
        { "pattern": "lighthouse", "dimension": "spatial", "responseTime": 7000 },
        { "pattern": "campfire", "dimension": "temperature", "responseTime": 3500 }
    ])
}

pub(super) fn request(user_id: Option<&str>, answers: Value) -> AssessmentRequest {
    AssessmentRequest {
        user_id: user_id.map(str::to_string),
        answers,
        behavior_data: None,
        algorithm: None,
    }
}

pub(super) fn build_service() -> (
    AssessmentService<InMemoryResultStore>,
    Arc<InMemoryResultStore>,
) {
    let repository = Arc::new(InMemoryResultStore::default());
    let service = AssessmentService::new(repository.clone(), Algorithm::Weighted);
    (service, repository)
}

pub(super) fn assessment_router_with_service(
    service: AssessmentService<InMemoryResultStore>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) struct UnavailableRepository;

impl ResultRepository for UnavailableRepository {
    fn save_result(&self, _result: StoredResult) -> Result<StoredResult, RepositoryError> {
        Err(RepositoryError::Unavailable("disk offline".to_string()))
    }

    fn fetch_result(&self, _id: &ResultId) -> Result<Option<StoredResult>, RepositoryError> {
        Err(RepositoryError::Unavailable("disk offline".to_string()))
    }

    fn record_profile(
        &self,
        _result: &StoredResult,
    ) -> Result<RespondentProfile, RepositoryError> {
        Err(RepositoryError::Unavailable("disk offline".to_string()))
    }

    fn fetch_profile(&self, _user_id: &str) -> Result<Option<RespondentProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("disk offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
