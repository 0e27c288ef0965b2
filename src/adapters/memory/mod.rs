//! Thread-safe in-memory repositories.
//!
//! The reference store adapter: used directly by the test suites and as the
//! substitutable fake required wherever a real document store is not wired
//! in. Each repository keeps its records in a `HashMap` behind an
//! `Arc<RwLock<…>>`; a poisoned lock surfaces as a persistence error rather
//! than a panic.

mod project;
mod resource;
mod task;

pub use project::InMemoryProjectRepository;
pub use resource::InMemoryResourceRepository;
pub use task::InMemoryTaskRepository;

use crate::ports::RepositoryError;

/// Maps a poisoned-lock failure onto the persistence error variant.
fn lock_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}
