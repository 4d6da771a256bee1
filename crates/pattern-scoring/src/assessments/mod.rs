//! Questionnaire scoring for the learning-style and cognitive-style assessments,
//! plus the thin service, router, and result store that wrap the engine.

pub mod cognitive;
pub mod learning;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use router::assessment_router;
pub use service::{AssessmentReceipt, AssessmentRequest, AssessmentService, AssessmentServiceError};
pub use store::{
    AssessmentKind, InMemoryResultStore, JsonFileResultStore, RepositoryError, RespondentProfile,
    ResultId, ResultRepository, StoredResult,
};
