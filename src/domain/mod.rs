//! Domain model for construction project tracking.
//!
//! Entities, identifier newtypes, and the value objects used to create and
//! mutate them. Infrastructure concerns stay outside the domain boundary;
//! cross-entity reference checks live in the service layer because they need
//! store access.

mod ids;
mod project;
mod resource;
mod task;

pub use ids::{ProjectId, ResourceId, TaskId};
pub use project::{NewProject, Project, ProjectChanges};
pub use resource::{NewResource, Resource, ResourceChanges, Supplier};
pub use task::{NewTask, ParseTaskStatusError, Task, TaskChanges, TaskStatus};
