//! Workflow Event Port
//!
//! Provides an observable interface for workflow steps.
//! Enables progress output, NDJSON event streams, and test assertions.

use std::time::Duration;

use crate::domain::entities::DeploymentHandle;
use crate::domain::value_objects::AppId;

/// Event emitted while a workflow runs
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowEvent {
    /// Create request about to be sent
    Submitting { source: String },

    /// Create collided with an existing application
    ExistingApplication { id: AppId, force: bool },

    /// In-flight deployment cancelled before a forced update
    StoppingDeployment { id: AppId, handle: DeploymentHandle },

    /// Update request about to be sent
    Updating { id: AppId },

    /// Rollback target chosen
    RollbackTarget { id: AppId, version: String },

    /// Waiting on a deployment started
    Waiting {
        handle: DeploymentHandle,
        timeout: Duration,
    },

    /// Polled the active deployments set
    Polled {
        handle: DeploymentHandle,
        elapsed: Duration,
    },

    /// Wait finished with the given outcome label
    WaitFinished {
        handle: DeploymentHandle,
        outcome: &'static str,
    },
}

/// Trait for receiving workflow events
///
/// Implementations can be:
/// - ConsoleEventSink: progress lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait WorkflowEventSink {
    /// Handle a workflow event
    fn on_event(&self, event: WorkflowEvent);

    /// Check if this sink wants per-poll events
    fn wants_poll_events(&self) -> bool {
        false
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl WorkflowEventSink for NoopEventSink {
    fn on_event(&self, _event: WorkflowEvent) {
        // Do nothing
    }
}
