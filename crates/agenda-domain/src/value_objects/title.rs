//! Validated task title value object

use crate::{DomainError, DomainResult};
use std::fmt;

/// Non-blank task title.
///
/// The original text is preserved verbatim; only input that is empty or
/// whitespace-only is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    /// Create a title from raw text.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTitle`] if the text is blank.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidTitle(
                "must not be empty or whitespace-only".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the title text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
