//! Clock port

use chrono::NaiveDate;

/// Source of the current date for deadline evaluation.
///
/// Injected into handlers so the deadline sweep stays deterministic under
/// test; production wiring uses the system clock adapter.
pub trait Clock: Send + Sync {
    /// The current date
    fn today(&self) -> NaiveDate;
}
