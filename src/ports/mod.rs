//! Port contracts for the document store.
//!
//! The persistence engine is an external collaborator; the rest of the crate
//! reaches it only through the repository traits defined here, so tests can
//! substitute an in-memory fake.

pub mod repository;

pub use repository::{
    ProjectRepository, RepositoryError, RepositoryResult, ResourceRepository, TaskRepository,
};
