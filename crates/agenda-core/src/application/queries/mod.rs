//! Queries - read intents with no side effects

use crate::domain::CategoryId;

/// Fetch a category by its store id
#[derive(Debug, Clone, Copy)]
pub struct GetCategoryById {
    id: CategoryId,
}

impl GetCategoryById {
    /// Build the query
    pub fn new(id: CategoryId) -> Self {
        Self { id }
    }

    /// Requested category id
    pub fn id(&self) -> CategoryId {
        self.id
    }
}
