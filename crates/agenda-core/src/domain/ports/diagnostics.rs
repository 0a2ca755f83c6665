//! Diagnostic log port
//!
//! Handlers report each invocation's outcome through this severity-leveled
//! sink: a warning-level notice on the success path, an error-level record
//! carrying the triggering fault on the failure path - exactly one emission
//! per invocation, never both, never zero. The sink is injected per handler
//! at construction; there is no ambient global sink.

use crate::domain::DomainError;

/// Severity-leveled sink for handler diagnostics.
pub trait DiagnosticLog: Send + Sync {
    /// Success-path notice.
    ///
    /// Emitted at warning severity, which this design uses as its
    /// operator-visible "notice" level.
    fn notice(&self, message: &str);

    /// Failure-path record.
    ///
    /// Carries the original fault object, not merely its rendered message,
    /// so downstream log processors can inspect it.
    fn failure(&self, message: &str, cause: &DomainError);
}
