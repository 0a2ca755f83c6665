//! Tracing-backed diagnostic log adapter

use crate::domain::{DomainError, ports::DiagnosticLog};

/// [`DiagnosticLog`] adapter forwarding to the `tracing` ecosystem.
///
/// Success notices are emitted at warn level - the level this design uses
/// for operator-visible notices - and failures at error level with the
/// cause attached as a structured field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn notice(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn failure(&self, message: &str, cause: &DomainError) {
        tracing::error!(cause = %cause, "{message}");
    }
}
