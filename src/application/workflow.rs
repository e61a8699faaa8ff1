//! Application Workflow
//!
//! Holds the collaborators shared by every state-changing operation: the
//! orchestrator client, the deployment waiter and the event sink. The
//! operations themselves live in `submit`, `resources`, `lifecycle`,
//! `rollback` and `inspect`.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use super::wait::{DeploymentWaiter, WaitReport};
use crate::domain::entities::{Application, DeploymentHandle};
use crate::domain::ports::{Clock, NoopEventSink, OrchestratorClient, WorkflowEventSink};
use crate::domain::value_objects::AppId;
use crate::error::{DeckhandError, DeckhandResult};

/// Whether a submission created a new application or updated one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitKind {
    Created,
    Updated,
}

/// Result of an operation that returns the full application record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub kind: SubmitKind,
    pub application: Application,
    /// Deployments cancelled by the stop-deploy policy
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stopped: Vec<DeploymentHandle>,
    /// Present only when waiting was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait: Option<WaitReport>,
}

/// Result of scale/restart/destroy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentResult {
    pub handle: DeploymentHandle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait: Option<WaitReport>,
}

/// Deployment workflow engine
///
/// Parameterized by its ports so tests can substitute a fake orchestrator
/// and a fake clock.
pub struct AppWorkflow<C, K>
where
    C: OrchestratorClient,
    K: Clock,
{
    pub(super) client: C,
    pub(super) waiter: DeploymentWaiter<K>,
    pub(super) events: Arc<dyn WorkflowEventSink>,
}

impl<C, K> AppWorkflow<C, K>
where
    C: OrchestratorClient,
    K: Clock,
{
    pub fn new(client: C, waiter: DeploymentWaiter<K>) -> Self {
        Self {
            client,
            waiter,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report workflow steps to `events`
    pub fn with_events(mut self, events: Arc<dyn WorkflowEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Wait on `handles` when `wait` is set; never otherwise
    ///
    /// A failed wait is reported as `Unconfirmed`, naming the change
    /// `action` already applied to `id`.
    pub(super) fn wait_if_requested(
        &self,
        wait: bool,
        action: &'static str,
        id: &AppId,
        handles: &[DeploymentHandle],
        timeout: Option<Duration>,
    ) -> DeckhandResult<Option<WaitReport>> {
        if !wait {
            return Ok(None);
        }
        self.waiter
            .wait_for_all(&self.client, handles, timeout, self.events.as_ref())
            .map(Some)
            .map_err(|source| DeckhandError::Unconfirmed {
                action,
                id: id.to_string(),
                source: Box::new(source),
            })
    }
}
