//! Task entity and its status lifecycle

use crate::{
    DomainError, DomainResult,
    entities::Category,
    value_objects::{TaskId, Title},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Custom serde for TaskId within entities
mod serde_task_id {
    use crate::value_objects::TaskId;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(id: &TaskId, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.raw().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i32::deserialize(deserializer)?;
        Ok(TaskId::new(value))
    }
}

/// Custom serde for Title within entities
mod serde_title {
    use crate::value_objects::Title;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(title: &Title, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        title.as_str().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Title, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Title::new(s).map_err(serde::de::Error::custom)
    }
}

/// Lifecycle states of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Freshly registered, not yet worked on
    Created,
    /// Being worked on
    Pending,
    /// Deadline passed while the task was still open
    Overdue,
    /// Done; carries a completion timestamp
    Completed,
}

impl TaskStatus {
    /// Whether a task in this status is still open for work.
    ///
    /// Open tasks are the ones the deadline sweep looks at.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, TaskStatus::Created | TaskStatus::Pending)
    }
}

/// A unit of work with a deadline, owned by a category.
///
/// # Invariant
///
/// `completed_at` is `Some` if and only if the status is
/// [`TaskStatus::Completed`]. Construction and every transition preserve
/// this; [`Task::restore`] validates it for stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(with = "serde_task_id")]
    id: TaskId,
    #[serde(with = "serde_title")]
    title: Title,
    category: Category,
    deadline: NaiveDate,
    completed_at: Option<DateTime<Utc>>,
    status: TaskStatus,
}

impl Task {
    /// Create a new task in [`TaskStatus::Created`] with an unassigned id.
    #[must_use]
    pub fn new(title: Title, category: Category, deadline: NaiveDate) -> Self {
        Self {
            id: TaskId::UNASSIGNED,
            title,
            category,
            deadline,
            completed_at: None,
            status: TaskStatus::Created,
        }
    }

    /// Rebuild a task from stored fields.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvariantViolation`] if the completion
    /// timestamp does not agree with the status.
    pub fn restore(
        id: TaskId,
        title: Title,
        category: Category,
        deadline: NaiveDate,
        completed_at: Option<DateTime<Utc>>,
        status: TaskStatus,
    ) -> DomainResult<Self> {
        match (status, completed_at.is_some()) {
            (TaskStatus::Completed, false) => Err(DomainError::invariant_violation(
                "completed task without completion timestamp",
            )),
            (other, true) if other != TaskStatus::Completed => {
                Err(DomainError::invariant_violation(
                    "completion timestamp on a task that is not completed",
                ))
            }
            _ => Ok(Self {
                id,
                title,
                category,
                deadline,
                completed_at,
                status,
            }),
        }
    }

    /// Task identity (unassigned before persistence)
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Task title
    #[must_use]
    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Owning category
    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Deadline date (no time component)
    #[must_use]
    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Completion instant, present exactly when the task is completed
    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Current lifecycle status
    #[must_use]
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Whether the task is still open for work
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Record the identity the store assigned on insert.
    ///
    /// Called by repository adapters; not part of regular domain flow.
    pub fn assign_id(&mut self, id: TaskId) {
        self.id = id;
    }

    /// Reevaluate scheduling against `today`.
    ///
    /// An open task whose deadline is strictly before `today` becomes
    /// [`TaskStatus::Overdue`]. Returns whether the status changed.
    pub fn refresh_status(&mut self, today: NaiveDate) -> bool {
        if self.is_open() && self.deadline < today {
            self.status = TaskStatus::Overdue;
            true
        } else {
            false
        }
    }

    /// Conclude the task at the given instant.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStateTransition`] if the task is
    /// already completed.
    pub fn complete(&mut self, at: DateTime<Utc>) -> DomainResult<()> {
        if self.status == TaskStatus::Completed {
            return Err(DomainError::invalid_transition("Completed", "Completed"));
        }
        self.status = TaskStatus::Completed;
        self.completed_at = Some(at);
        Ok(())
    }
}
