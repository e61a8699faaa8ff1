//! Read-only inspection: list, get, versions

use super::workflow::AppWorkflow;
use crate::domain::entities::{Application, VersionHistory};
use crate::domain::ports::{Clock, OrchestratorClient};
use crate::domain::value_objects::AppId;
use crate::error::DeckhandResult;

impl<C, K> AppWorkflow<C, K>
where
    C: OrchestratorClient,
    K: Clock,
{
    /// List applications; a blank filter lists everything
    pub fn list(&self, filter: Option<&str>) -> DeckhandResult<Vec<Application>> {
        let filter = filter.map(str::trim).filter(|f| !f.is_empty());
        Ok(self.client.list_applications(filter)?)
    }

    pub fn get(&self, id: &AppId) -> DeckhandResult<Application> {
        Ok(self.client.get_application(id)?)
    }

    pub fn versions(&self, id: &AppId) -> DeckhandResult<VersionHistory> {
        Ok(self.client.list_versions(id)?)
    }
}
