//! Commands - write intents that change system state
//!
//! Commands are immutable value objects, created per request and consumed
//! exactly once by exactly one handler invocation. Construction validates
//! required fields, so a handler is never asked to execute an invalid
//! command.

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Category, Title};
use chrono::NaiveDate;

/// Register a new task under a category with a deadline
#[derive(Debug, Clone)]
pub struct RegisterTask {
    title: Title,
    category: Category,
    deadline: NaiveDate,
}

impl RegisterTask {
    /// Build the command, rejecting blank titles up front.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Validation`] for an empty or
    /// whitespace-only title.
    pub fn new(
        title: impl Into<String>,
        category: Category,
        deadline: NaiveDate,
    ) -> ApplicationResult<Self> {
        let title =
            Title::new(title).map_err(|error| ApplicationError::Validation(error.to_string()))?;
        Ok(Self {
            title,
            category,
            deadline,
        })
    }

    /// Title of the task to register
    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Category the task belongs to
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Deadline date
    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }
}

/// Recompute deadline status across all open tasks
///
/// Carries no payload; the handler supplies both the task filter and the
/// reference date.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecomputeDeadlines;
