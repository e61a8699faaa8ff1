//! Orchestrator port
//!
//! The workflow engine talks to the cluster only through this trait.
//! `infrastructure::marathon::MarathonClient` is the production
//! implementation; tests use in-memory fakes with call counters.

use thiserror::Error;

use crate::domain::entities::{
    Application, ApplicationUpdate, DeploymentHandle, DeploymentSummary, DescriptorRequest,
    VersionHistory,
};
use crate::domain::value_objects::AppId;

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;

/// Failures reported by (or while talking to) the orchestrator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrchestratorError {
    /// Create collided with an existing application
    #[error("application '{id}' already exists")]
    AlreadyExists { id: AppId },

    #[error("application '{id}' not found")]
    NotFound { id: String },

    /// Non-success response from the API
    #[error("orchestrator rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Connection, TLS or timeout failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Descriptor text could not be decoded or resolved
    #[error("invalid descriptor {source_name}: {message}")]
    Descriptor { source_name: String, message: String },
}

/// Operations consumed from the orchestrator
pub trait OrchestratorClient {
    /// Create an application from a descriptor
    fn create_application(&self, request: &DescriptorRequest) -> OrchestratorResult<Application>;

    /// Update an existing application and return its new state
    fn update_application(&self, update: &ApplicationUpdate) -> OrchestratorResult<Application>;

    fn get_application(&self, id: &AppId) -> OrchestratorResult<Application>;

    /// List applications; `filter` is a `key=value` expression
    fn list_applications(&self, filter: Option<&str>) -> OrchestratorResult<Vec<Application>>;

    fn list_versions(&self, id: &AppId) -> OrchestratorResult<VersionHistory>;

    fn scale_application(&self, id: &AppId, instances: u32)
        -> OrchestratorResult<DeploymentHandle>;

    fn restart_application(&self, id: &AppId, force: bool)
        -> OrchestratorResult<DeploymentHandle>;

    fn destroy_application(&self, id: &AppId) -> OrchestratorResult<DeploymentHandle>;

    /// Deployments currently in progress
    fn active_deployments(&self) -> OrchestratorResult<Vec<DeploymentSummary>>;

    /// Cancel an in-flight deployment
    fn cancel_deployment(&self, handle: &DeploymentHandle) -> OrchestratorResult<()>;
}

impl<T: OrchestratorClient + ?Sized> OrchestratorClient for &T {
    fn create_application(&self, request: &DescriptorRequest) -> OrchestratorResult<Application> {
        (**self).create_application(request)
    }

    fn update_application(&self, update: &ApplicationUpdate) -> OrchestratorResult<Application> {
        (**self).update_application(update)
    }

    fn get_application(&self, id: &AppId) -> OrchestratorResult<Application> {
        (**self).get_application(id)
    }

    fn list_applications(&self, filter: Option<&str>) -> OrchestratorResult<Vec<Application>> {
        (**self).list_applications(filter)
    }

    fn list_versions(&self, id: &AppId) -> OrchestratorResult<VersionHistory> {
        (**self).list_versions(id)
    }

    fn scale_application(
        &self,
        id: &AppId,
        instances: u32,
    ) -> OrchestratorResult<DeploymentHandle> {
        (**self).scale_application(id, instances)
    }

    fn restart_application(&self, id: &AppId, force: bool) -> OrchestratorResult<DeploymentHandle> {
        (**self).restart_application(id, force)
    }

    fn destroy_application(&self, id: &AppId) -> OrchestratorResult<DeploymentHandle> {
        (**self).destroy_application(id)
    }

    fn active_deployments(&self) -> OrchestratorResult<Vec<DeploymentSummary>> {
        (**self).active_deployments()
    }

    fn cancel_deployment(&self, handle: &DeploymentHandle) -> OrchestratorResult<()> {
        (**self).cancel_deployment(handle)
    }
}
