//! Application entity and local update requests

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::deployment::DeploymentHandle;
use crate::domain::value_objects::AppId;

/// Application as reported by the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: AppId,
    #[serde(default)]
    pub cpus: f64,
    /// Memory in MB
    #[serde(default)]
    pub mem: f64,
    #[serde(default)]
    pub instances: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Deployments currently converging this application
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deployments: Vec<DeploymentHandle>,
}

impl Application {
    pub fn new(id: AppId) -> Self {
        Self {
            id,
            cpus: 0.0,
            mem: 0.0,
            instances: 0,
            image: None,
            cmd: None,
            labels: BTreeMap::new(),
            version: None,
            deployments: Vec::new(),
        }
    }

    /// Apply the fields set on `patch`
    pub fn apply(&mut self, patch: &ApplicationPatch) {
        if let Some(cpus) = patch.cpus {
            self.cpus = cpus;
        }
        if let Some(mem) = patch.mem {
            self.mem = mem;
        }
        if let Some(instances) = patch.instances {
            self.instances = instances;
        }
        if let Some(version) = &patch.version {
            self.version = Some(version.clone());
        }
    }
}

/// Partial update for an existing application
///
/// Only the fields that are set are sent to the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationPatch {
    pub id: AppId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mem: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,
    /// Target version for a rollback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ApplicationPatch {
    pub fn new(id: AppId) -> Self {
        Self {
            id,
            cpus: None,
            mem: None,
            instances: None,
            version: None,
        }
    }

    pub fn cpus(mut self, cpus: f64) -> Self {
        self.cpus = Some(cpus);
        self
    }

    pub fn mem(mut self, mem: f64) -> Self {
        self.mem = Some(mem);
        self
    }

    pub fn instances(mut self, instances: u32) -> Self {
        self.instances = Some(instances);
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> AppId {
        AppId::parse("/web").unwrap()
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = ApplicationPatch::new(id()).cpus(0.5);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"id": "/web", "cpus": 0.5}));
    }

    #[test]
    fn apply_patch_updates_fields() {
        let mut app = Application::new(id());
        app.apply(&ApplicationPatch::new(id()).mem(256.0).version("v2"));
        assert_eq!(app.mem, 256.0);
        assert_eq!(app.version.as_deref(), Some("v2"));
        assert_eq!(app.cpus, 0.0);
    }

    #[test]
    fn application_deserializes_with_defaults() {
        let app: Application = serde_json::from_str(r#"{"id": "/web"}"#).unwrap();
        assert_eq!(app.instances, 0);
        assert!(app.deployments.is_empty());
    }
}
