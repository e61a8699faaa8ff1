//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod file_system;
pub mod orchestrator;
pub mod workflow_events;

pub use clock::{CancelToken, Clock};
pub use file_system::{FileSystem, FsError, FsResult};
pub use orchestrator::{OrchestratorClient, OrchestratorError, OrchestratorResult};
pub use workflow_events::{NoopEventSink, WorkflowEvent, WorkflowEventSink};
