//! Ports - the seams handlers depend on
//!
//! These ports define the core's requirements on its collaborators,
//! allowing infrastructure adapters (and test doubles) to supply the
//! actual persistence, logging and time sources.

pub mod clock;
pub mod diagnostics;
pub mod repositories;

pub use clock::Clock;
pub use diagnostics::DiagnosticLog;
pub use repositories::TaskRepository;
