use std::sync::Arc;

use serde_json::json;

use super::common::*;
use crate::assessments::learning::Algorithm;
use crate::assessments::scoring::InputError;
use crate::assessments::service::AssessmentPayload;
use crate::assessments::store::{AssessmentKind, RepositoryError, ResultId, ResultRepository};
use crate::assessments::{AssessmentService, AssessmentServiceError};

#[test]
fn submit_learning_style_persists_result_and_profile() {
    let (service, repository) = build_service();

    let receipt = service
        .submit_learning_style(request(Some("learner-7"), learning_answers()))
        .expect("submission succeeds");

    let stored = repository
        .fetch_result(&receipt.result_id)
        .expect("fetch succeeds")
        .expect("result stored");
    assert_eq!(stored.kind, AssessmentKind::LearningStyle);
    assert_eq!(stored.dominant.as_deref(), Some("visual"));
    assert_eq!(stored.user_id.as_deref(), Some("learner-7"));
    assert_eq!(stored.payload["algorithm"], json!("weighted"));

    let profile = repository
        .fetch_profile("learner-7")
        .expect("fetch succeeds")
        .expect("profile created");
    assert_eq!(profile.latest_result_id, Some(receipt.result_id));
    assert_eq!(profile.assessments_taken, 1);
}

#[test]
fn anonymous_submissions_skip_profiles() {
    let (service, repository) = build_service();

    service
        .submit_learning_style(request(Some("   "), learning_answers()))
        .expect("submission succeeds");

    assert_eq!(repository.len(), 1);
    assert!(repository
        .fetch_profile("   ")
        .expect("fetch succeeds")
        .is_none());
}

#[test]
fn submit_rejects_non_array_answers() {
    let (service, repository) = build_service();

    match service.submit_learning_style(request(None, json!({ "category": "visual" }))) {
        Err(AssessmentServiceError::Input(InputError::NotAnArray)) => {}
        other => panic!("expected input error, got {other:?}"),
    }
    assert!(repository.is_empty(), "rejected input must not be stored");
}

#[test]
fn algorithm_flag_selects_strategy() {
    let (service, _) = build_service();

    let mut advanced = request(None, learning_answers());
    advanced.algorithm = Some("advanced".to_string());
    let receipt = service
        .submit_learning_style(advanced)
        .expect("submission succeeds");
    match receipt.result {
        AssessmentPayload::LearningStyle(result) => {
            assert_eq!(result.algorithm, Algorithm::Advanced);
            assert!(result.recommendations.is_some());
            assert!(result.pattern_interactions.is_some());
        }
        other => panic!("expected learning-style payload, got {other:?}"),
    }

    assert_eq!(service.resolve_algorithm(Some("quantum")), Algorithm::Weighted);
    assert_eq!(service.resolve_algorithm(None), Algorithm::Weighted);
}

#[test]
fn configured_default_algorithm_applies_without_flag() {
    let repository = Arc::new(crate::assessments::InMemoryResultStore::default());
    let service = AssessmentService::new(repository, Algorithm::Basic);

    let receipt = service
        .submit_learning_style(request(None, learning_answers()))
        .expect("submission succeeds");
    match receipt.result {
        AssessmentPayload::LearningStyle(result) => {
            assert_eq!(result.algorithm, Algorithm::Basic);
            assert!(result.profile_type.is_none());
        }
        other => panic!("expected learning-style payload, got {other:?}"),
    }
}

#[test]
fn submit_cognitive_records_kind_and_dominant_dimension() {
    let (service, repository) = build_service();

    let receipt = service
        .submit_cognitive(request(Some("learner-7"), scenario_answers()))
        .expect("submission succeeds");

    let stored = repository
        .fetch_result(&receipt.result_id)
        .expect("fetch succeeds")
        .expect("result stored");
    assert_eq!(stored.kind, AssessmentKind::Cognitive);
    assert_eq!(stored.dominant.as_deref(), Some("spatial"));
    assert_eq!(stored.payload["algorithm"], json!("cognitive"));

    let profile = service.profile("learner-7").expect("profile present");
    assert_eq!(profile.counts_by_kind[&AssessmentKind::Cognitive], 1);
}

#[test]
fn result_and_profile_propagate_not_found() {
    let (service, _) = build_service();

    assert!(matches!(
        service.result(&ResultId("missing".to_string())),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound))
    ));
    assert!(matches!(
        service.profile("nobody"),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn repository_failures_surface_as_repository_errors() {
    let service = AssessmentService::new(Arc::new(UnavailableRepository), Algorithm::Weighted);

    assert!(matches!(
        service.submit_cognitive(request(Some("learner-7"), scenario_answers())),
        Err(AssessmentServiceError::Repository(
            RepositoryError::Unavailable(_)
        ))
    ));
}
