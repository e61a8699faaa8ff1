//! Deployment Submitter
//!
//! Always creates first. When the application already exists, the
//! `SubmitPolicy` decision table decides between rejecting and a forced
//! update (optionally cancelling in-flight deployments first).

use tracing::{debug, info, warn};

use super::workflow::{AppWorkflow, Submission, SubmitKind};
use crate::domain::entities::{ApplicationPatch, ApplicationUpdate, DeploymentHandle, DescriptorRequest};
use crate::domain::ports::{Clock, OrchestratorClient, OrchestratorError, WorkflowEvent};
use crate::domain::services::{PolicyStep, SubmitPolicy};
use crate::domain::value_objects::{AppId, SubmissionOptions};
use crate::error::{DeckhandError, DeckhandResult};

impl<C, K> AppWorkflow<C, K>
where
    C: OrchestratorClient,
    K: Clock,
{
    /// Submit a descriptor: create, or resolve a collision per `options`
    pub fn submit(
        &self,
        request: &DescriptorRequest,
        options: &SubmissionOptions,
    ) -> DeckhandResult<Submission> {
        self.events.on_event(WorkflowEvent::Submitting {
            source: request.source.clone(),
        });
        debug!(source = %request.source, "creating application");

        match self.client.create_application(request) {
            Ok(application) => {
                info!(app = %application.id, "application created");
                let wait = self.wait_if_requested(
                    options.wait,
                    "create",
                    &application.id,
                    &application.deployments,
                    options.timeout,
                )?;
                Ok(Submission {
                    kind: SubmitKind::Created,
                    application,
                    stopped: Vec::new(),
                    wait,
                })
            }
            Err(OrchestratorError::AlreadyExists { id }) => {
                self.resolve_existing(id, request, options)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn resolve_existing(
        &self,
        id: AppId,
        request: &DescriptorRequest,
        options: &SubmissionOptions,
    ) -> DeckhandResult<Submission> {
        self.events.on_event(WorkflowEvent::ExistingApplication {
            id: id.clone(),
            force: options.force,
        });

        let mut stopped = Vec::new();
        for step in SubmitPolicy::from_options(options).on_existing() {
            match step {
                PolicyStep::Reject => break,
                PolicyStep::StopDeployments => stopped = self.stop_deployments(&id)?,
                PolicyStep::Update => {
                    info!(app = %id, "application exists, updating (force)");
                    self.events.on_event(WorkflowEvent::Updating { id: id.clone() });
                    let application = self
                        .client
                        .update_application(&ApplicationUpdate::Descriptor(request.clone()))?;
                    let wait = self.wait_if_requested(
                        options.wait,
                        "update",
                        &application.id,
                        &application.deployments,
                        options.timeout,
                    )?;
                    return Ok(Submission {
                        kind: SubmitKind::Updated,
                        application,
                        stopped,
                        wait,
                    });
                }
            }
        }

        Err(DeckhandError::AlreadyExists { id: id.to_string() })
    }

    /// Cancel every in-flight deployment affecting `id`
    fn stop_deployments(&self, id: &AppId) -> DeckhandResult<Vec<DeploymentHandle>> {
        let affecting: Vec<DeploymentHandle> = self
            .client
            .active_deployments()?
            .into_iter()
            .filter(|d| d.affects(id))
            .map(|d| d.handle)
            .collect();

        for handle in &affecting {
            warn!(app = %id, deployment = %handle, "cancelling in-flight deployment");
            self.events.on_event(WorkflowEvent::StoppingDeployment {
                id: id.clone(),
                handle: handle.clone(),
            });
            self.client.cancel_deployment(handle)?;
        }
        Ok(affecting)
    }

    /// Apply a partial update (resources, rollback); never a create
    pub(super) fn apply_patch(
        &self,
        patch: ApplicationPatch,
        wait: bool,
        timeout: Option<std::time::Duration>,
    ) -> DeckhandResult<Submission> {
        self.events.on_event(WorkflowEvent::Updating {
            id: patch.id.clone(),
        });
        debug!(app = %patch.id, "updating application");
        let application = self
            .client
            .update_application(&ApplicationUpdate::Patch(patch))?;
        let wait = self.wait_if_requested(
            wait,
            "update",
            &application.id,
            &application.deployments,
            timeout,
        )?;
        Ok(Submission {
            kind: SubmitKind::Updated,
            application,
            stopped: Vec::new(),
            wait,
        })
    }
}
