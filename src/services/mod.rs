//! Orchestration services, one exposed operation per API route.
//!
//! Each service validates first, checks references second, and only then
//! issues store mutations, so no violation can leave a partial write
//! behind. Collaborators are injected as `Arc`s; nothing here is
//! process-wide state.

pub mod project_lifecycle;
pub mod resource_integrity;
pub mod task_linkage;

pub use project_lifecycle::{
    ProjectLifecycleError, ProjectLifecycleResult, ProjectLifecycleService,
};
pub use resource_integrity::{
    ResourceIntegrityError, ResourceIntegrityResult, ResourceIntegrityService,
};
pub use task_linkage::{TaskLinkageError, TaskLinkageResult, TaskLinkageService, TaskView};
