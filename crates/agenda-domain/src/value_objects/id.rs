//! Generic integer-backed Identifier Value Object
//!
//! Type-safe identifier using phantom types for compile-time differentiation.
//! Uses sealed trait pattern to prevent external marker implementations.
//!
//! Identity is assigned by the store: freshly constructed entities carry
//! [`Id::UNASSIGNED`] until a repository adapter persists them.

use std::fmt;
use std::marker::PhantomData;

/// Sealed trait module preventing external implementations
mod private {
    pub trait Sealed {}
}

/// Marker trait for type-safe ID differentiation.
///
/// This trait is sealed - external crates cannot implement it.
/// Only marker types defined in this module are valid.
pub trait IdMarker: private::Sealed + Send + Sync + 'static {}

/// Marker type for task identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskMarker;

/// Marker type for category identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryMarker;

impl private::Sealed for TaskMarker {}
impl private::Sealed for CategoryMarker {}

impl IdMarker for TaskMarker {}
impl IdMarker for CategoryMarker {}

/// Generic store-assigned identifier with phantom type safety.
///
/// Provides compile-time type differentiation between different ID types
/// (e.g., `TaskId` vs `CategoryId`) while sharing a single implementation.
///
/// # Type Safety
///
/// The phantom type parameter `T` ensures that different ID types cannot
/// be accidentally mixed:
///
/// ```compile_fail
/// # use agenda_domain::value_objects::{TaskId, CategoryId};
/// let task_id: TaskId = TaskId::new(1);
/// let category_id: CategoryId = task_id;  // Compile error!
/// ```
///
/// # Zero-Cost Abstraction
///
/// `PhantomData<T>` is a zero-sized type, so `Id<T>` has the same memory
/// layout as a plain `i32`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T: IdMarker> {
    value: i32,
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// The pre-persistence identity (raw value 0).
    ///
    /// Entities carry this until the store assigns a real id on insert.
    pub const UNASSIGNED: Self = Self {
        value: 0,
        _marker: PhantomData,
    };

    /// Create identifier from a raw store value
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the raw integer value
    #[must_use]
    pub const fn raw(&self) -> i32 {
        self.value
    }

    /// Whether the store has assigned this identity yet
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.value != 0
    }
}

impl<T: IdMarker> Default for Id<T> {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

impl<T: IdMarker> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(std::any::type_name::<Self>())
            .field(&self.value)
            .finish()
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T: IdMarker> From<i32> for Id<T> {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> From<Id<T>> for i32 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Type alias for task identifier
pub type TaskId = Id<TaskMarker>;

/// Type alias for category identifier
pub type CategoryId = Id<CategoryMarker>;
