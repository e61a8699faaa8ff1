//! Rollback Resolver
//!
//! Resolves the target version (explicit, or the one before current) and
//! routes it through the update path.

use std::time::Duration;

use tracing::info;

use super::workflow::{AppWorkflow, Submission};
use crate::domain::entities::ApplicationPatch;
use crate::domain::ports::{Clock, OrchestratorClient, WorkflowEvent};
use crate::domain::services::{select_rollback_target, RollbackSelection};
use crate::domain::value_objects::AppId;
use crate::error::{DeckhandError, DeckhandResult};

impl<C, K> AppWorkflow<C, K>
where
    C: OrchestratorClient,
    K: Clock,
{
    /// Pick the version to roll back to
    ///
    /// An explicit version is used verbatim; the orchestrator validates it.
    pub fn resolve_rollback_target(
        &self,
        id: &AppId,
        explicit_version: Option<&str>,
    ) -> DeckhandResult<String> {
        if let Some(version) = explicit_version {
            return Ok(version.to_string());
        }

        let history = self.client.list_versions(id)?;
        match select_rollback_target(&history) {
            RollbackSelection::Target(version) => Ok(version),
            RollbackSelection::InsufficientHistory { available } => {
                Err(DeckhandError::InsufficientHistory {
                    id: id.to_string(),
                    available,
                })
            }
        }
    }

    /// Roll `id` back and optionally wait for the deployment
    pub fn rollback(
        &self,
        id: &AppId,
        explicit_version: Option<&str>,
        wait: bool,
        timeout: Option<Duration>,
    ) -> DeckhandResult<Submission> {
        let version = self.resolve_rollback_target(id, explicit_version)?;
        info!(app = %id, version = %version, "rolling back");
        self.events.on_event(WorkflowEvent::RollbackTarget {
            id: id.clone(),
            version: version.clone(),
        });
        self.apply_patch(ApplicationPatch::new(id.clone()).version(version), wait, timeout)
    }
}
