//! Deployment Waiter
//!
//! Polls the orchestrator's active-deployments set until the awaited
//! deployments disappear, the deadline passes, or the caller cancels.
//! Timing out never undoes the change that started the deployment.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::entities::DeploymentHandle;
use crate::domain::ports::{CancelToken, Clock, OrchestratorClient, WorkflowEvent, WorkflowEventSink};
use crate::error::{DeckhandError, DeckhandResult};

/// Overall bound used when no timeout is configured
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(80);

/// Default delay between status polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// How a wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitOutcome {
    /// Every awaited deployment left the active set
    Completed,
    /// Deadline elapsed first; the deployment keeps running server-side
    TimedOut,
    /// Cancel token was set; the deployment keeps running server-side
    Cancelled,
}

impl WaitOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            WaitOutcome::Completed => "completed",
            WaitOutcome::TimedOut => "timed_out",
            WaitOutcome::Cancelled => "cancelled",
        }
    }
}

/// Summary of one wait
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitReport {
    pub outcome: WaitOutcome,
    pub handles: Vec<DeploymentHandle>,
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl WaitReport {
    pub fn is_completed(&self) -> bool {
        self.outcome == WaitOutcome::Completed
    }
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Timing parameters for the waiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitSettings {
    pub default_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            default_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WaitSettings {
    /// Effective bound: a zero or absent timeout means the default
    pub fn effective_timeout(&self, requested: Option<Duration>) -> Duration {
        requested
            .filter(|d| !d.is_zero())
            .unwrap_or(self.default_timeout)
    }
}

/// Bounded polling loop over `OrchestratorClient::active_deployments`
pub struct DeploymentWaiter<K: Clock> {
    clock: K,
    settings: WaitSettings,
    cancel: CancelToken,
}

impl<K: Clock> DeploymentWaiter<K> {
    pub fn new(clock: K, settings: WaitSettings, cancel: CancelToken) -> Self {
        Self {
            clock,
            settings,
            cancel,
        }
    }

    pub fn settings(&self) -> &WaitSettings {
        &self.settings
    }

    /// Wait for a single deployment
    pub fn wait_for_completion<C: OrchestratorClient>(
        &self,
        client: &C,
        handle: &DeploymentHandle,
        timeout: Option<Duration>,
        events: &dyn WorkflowEventSink,
    ) -> DeckhandResult<WaitReport> {
        self.wait_for_all(client, std::slice::from_ref(handle), timeout, events)
    }

    /// Wait for each deployment in turn under one overall deadline
    pub fn wait_for_all<C: OrchestratorClient>(
        &self,
        client: &C,
        handles: &[DeploymentHandle],
        timeout: Option<Duration>,
        events: &dyn WorkflowEventSink,
    ) -> DeckhandResult<WaitReport> {
        let timeout = self.settings.effective_timeout(timeout);
        let start = self.clock.now();
        // None when the bound lies beyond what `Instant` can represent.
        let deadline = start.checked_add(timeout);

        for handle in handles {
            events.on_event(WorkflowEvent::Waiting {
                handle: handle.clone(),
                timeout,
            });
            info!(deployment = %handle, timeout_secs = timeout.as_secs(), "waiting for deployment");

            let outcome = self.poll_until_gone(client, handle, deadline, events)?;
            events.on_event(WorkflowEvent::WaitFinished {
                handle: handle.clone(),
                outcome: outcome.label(),
            });

            if outcome != WaitOutcome::Completed {
                return Ok(WaitReport {
                    outcome,
                    handles: handles.to_vec(),
                    elapsed: self.clock.now().saturating_duration_since(start),
                });
            }
        }

        Ok(WaitReport {
            outcome: WaitOutcome::Completed,
            handles: handles.to_vec(),
            elapsed: self.clock.now().saturating_duration_since(start),
        })
    }

    fn poll_until_gone<C: OrchestratorClient>(
        &self,
        client: &C,
        handle: &DeploymentHandle,
        deadline: Option<Instant>,
        events: &dyn WorkflowEventSink,
    ) -> DeckhandResult<WaitOutcome> {
        let start = self.clock.now();
        loop {
            if self.cancel.is_cancelled() {
                return Ok(WaitOutcome::Cancelled);
            }

            let active = client
                .active_deployments()
                .map_err(|source| DeckhandError::Wait {
                    handle: handle.id.clone(),
                    source,
                })?;
            let elapsed = self.clock.now().saturating_duration_since(start);
            if events.wants_poll_events() {
                events.on_event(WorkflowEvent::Polled {
                    handle: handle.clone(),
                    elapsed,
                });
            }

            if !active.iter().any(|d| &d.handle == handle) {
                debug!(deployment = %handle, elapsed_ms = elapsed.as_millis() as u64, "deployment finished");
                return Ok(WaitOutcome::Completed);
            }

            let now = self.clock.now();
            let pause = match deadline {
                Some(deadline) if now >= deadline => return Ok(WaitOutcome::TimedOut),
                Some(deadline) => self.settings.poll_interval.min(deadline - now),
                None => self.settings.poll_interval,
            };
            self.clock.sleep(pause);
        }
    }
}
