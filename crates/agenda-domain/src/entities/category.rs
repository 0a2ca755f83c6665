//! Category entity

use crate::{
    DomainError, DomainResult,
    value_objects::CategoryId,
};
use serde::{Deserialize, Serialize};

/// Custom serde for CategoryId within entities
mod serde_category_id {
    use crate::value_objects::CategoryId;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(id: &CategoryId, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.raw().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<CategoryId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i32::deserialize(deserializer)?;
        Ok(CategoryId::new(value))
    }
}

/// Grouping that tasks belong to.
///
/// Immutable after construction, except for the store-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(with = "serde_category_id")]
    id: CategoryId,
    name: String,
}

impl Category {
    /// Create a category that has not been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCategoryName`] if the name is blank.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        Self::with_id(CategoryId::UNASSIGNED, name)
    }

    /// Create a category with a known identity (e.g. rehydrated from a store).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCategoryName`] if the name is blank.
    pub fn with_id(id: CategoryId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidCategoryName(
                "must not be empty or whitespace-only".to_string(),
            ));
        }
        Ok(Self { id, name })
    }

    /// Category identity (unassigned before persistence)
    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Category name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record the identity the store assigned on insert.
    ///
    /// Called by repository adapters; not part of regular domain flow.
    pub fn assign_id(&mut self, id: CategoryId) {
        self.id = id;
    }
}
