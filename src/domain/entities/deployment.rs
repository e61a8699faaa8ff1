//! Deployments and version history

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AppId;

/// Opaque identifier of one in-flight deployment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeploymentHandle {
    pub id: String,
}

impl DeploymentHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl std::fmt::Display for DeploymentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

/// Entry of the orchestrator's active-deployments set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentSummary {
    pub handle: DeploymentHandle,
    pub affected_apps: Vec<AppId>,
}

impl DeploymentSummary {
    pub fn affects(&self, id: &AppId) -> bool {
        self.affected_apps.iter().any(|a| a == id)
    }
}

/// Version identifiers for an application, most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionHistory {
    pub versions: Vec<String>,
}

impl VersionHistory {
    pub fn new(versions: Vec<String>) -> Self {
        Self { versions }
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Version immediately prior to the current one
    pub fn previous(&self) -> Option<&str> {
        self.versions.get(1).map(String::as_str)
    }
}
