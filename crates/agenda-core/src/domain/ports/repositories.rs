//! Repository port for task and category persistence
//!
//! Defines the handlers' requirements on the store. Implementations make
//! no idempotence promises, and no caller in the core retries a failed
//! call - retry policy, if any, belongs above the handlers.

use crate::domain::{Category, CategoryId, DomainResult, Task};

/// Abstract persistence capability for tasks and categories.
///
/// Bulk operations are all-or-nothing from the caller's point of view: a
/// handler issues one `insert_tasks`/`update_tasks` call per invocation
/// however many records the batch covers.
pub trait TaskRepository: Send + Sync {
    /// Persist a batch of tasks, assigning identities where missing.
    ///
    /// # Errors
    ///
    /// Fails with a generic storage fault on any persistence error.
    fn insert_tasks(&self, tasks: Vec<Task>) -> DomainResult<()>;

    /// Persist changes to a batch of already-tracked tasks.
    ///
    /// # Errors
    ///
    /// Same failure contract as [`TaskRepository::insert_tasks`].
    fn update_tasks(&self, tasks: Vec<Task>) -> DomainResult<()>;

    /// Read the tasks matching a caller-supplied predicate.
    ///
    /// Reads do not fail; an empty result is an empty `Vec`.
    fn tasks_matching(&self, predicate: &dyn Fn(&Task) -> bool) -> Vec<Task>;

    /// Look up a category by its store id.
    ///
    /// Absence is `Ok(None)`; an `Err` is a persistence fault.
    fn category_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
}
