//! Scale, restart and destroy
//!
//! Each returns the handle of the deployment it triggered and waits on it
//! only when asked to.

use std::time::Duration;

use tracing::info;

use super::resources::parse_count;
use super::workflow::{AppWorkflow, DeploymentResult};
use crate::domain::entities::DeploymentHandle;
use crate::domain::ports::{Clock, OrchestratorClient};
use crate::domain::value_objects::{AppId, ResourceField};
use crate::error::DeckhandResult;

impl<C, K> AppWorkflow<C, K>
where
    C: OrchestratorClient,
    K: Clock,
{
    /// Scale to `raw_instances` total instances
    pub fn scale(
        &self,
        id: &AppId,
        raw_instances: &str,
        wait: bool,
        timeout: Option<Duration>,
    ) -> DeckhandResult<DeploymentResult> {
        let instances = parse_count(ResourceField::Instances, raw_instances)?;
        let handle = self.client.scale_application(id, instances)?;
        info!(app = %id, instances, deployment = %handle, "scale requested");
        self.finish("scale", id, handle, wait, timeout)
    }

    pub fn restart(
        &self,
        id: &AppId,
        force: bool,
        wait: bool,
        timeout: Option<Duration>,
    ) -> DeckhandResult<DeploymentResult> {
        let handle = self.client.restart_application(id, force)?;
        info!(app = %id, force, deployment = %handle, "restart requested");
        self.finish("restart", id, handle, wait, timeout)
    }

    pub fn destroy(
        &self,
        id: &AppId,
        wait: bool,
        timeout: Option<Duration>,
    ) -> DeckhandResult<DeploymentResult> {
        let handle = self.client.destroy_application(id)?;
        info!(app = %id, deployment = %handle, "destroy requested");
        self.finish("destroy", id, handle, wait, timeout)
    }

    fn finish(
        &self,
        action: &'static str,
        id: &AppId,
        handle: DeploymentHandle,
        wait: bool,
        timeout: Option<Duration>,
    ) -> DeckhandResult<DeploymentResult> {
        let wait =
            self.wait_if_requested(wait, action, id, std::slice::from_ref(&handle), timeout)?;
        Ok(DeploymentResult { handle, wait })
    }
}
