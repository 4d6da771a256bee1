//! Persistence collaborator for computed results and per-respondent profiles.

mod file;
mod memory;
mod repository;

pub use file::JsonFileResultStore;
pub use memory::InMemoryResultStore;
pub use repository::{
    AssessmentKind, ProfileEntry, RepositoryError, RespondentProfile, ResultId, ResultRepository,
    StoredResult,
};
