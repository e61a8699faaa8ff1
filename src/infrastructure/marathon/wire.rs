//! Marathon REST payloads

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::entities::{Application, DeploymentHandle, DeploymentSummary};
use crate::domain::value_objects::AppId;

#[derive(Debug, Deserialize)]
pub struct AppEnvelope {
    pub app: MarathonApp,
}

#[derive(Debug, Deserialize)]
pub struct AppsEnvelope {
    #[serde(default)]
    pub apps: Vec<MarathonApp>,
}

#[derive(Debug, Deserialize)]
pub struct VersionsEnvelope {
    #[serde(default)]
    pub versions: Vec<String>,
}

/// Body returned by calls that start a deployment
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRef {
    pub deployment_id: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarathonDeployment {
    pub id: String,
    #[serde(default)]
    pub affected_apps: Vec<String>,
}

impl From<MarathonDeployment> for DeploymentSummary {
    fn from(d: MarathonDeployment) -> Self {
        DeploymentSummary {
            handle: DeploymentHandle::new(d.id),
            affected_apps: d
                .affected_apps
                .iter()
                .filter_map(|id| AppId::parse(id))
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub docker: Option<Docker>,
}

#[derive(Debug, Deserialize)]
pub struct Docker {
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeploymentId {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct MarathonApp {
    pub id: AppId,
    #[serde(default)]
    pub cpus: f64,
    #[serde(default)]
    pub mem: f64,
    #[serde(default)]
    pub instances: u32,
    #[serde(default)]
    pub cmd: Option<String>,
    #[serde(default)]
    pub container: Option<Container>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub deployments: Vec<DeploymentId>,
}

impl From<MarathonApp> for Application {
    fn from(app: MarathonApp) -> Self {
        let image = app
            .container
            .and_then(|c| c.docker)
            .and_then(|d| d.image);
        Application {
            id: app.id,
            cpus: app.cpus,
            mem: app.mem,
            instances: app.instances,
            image,
            cmd: app.cmd,
            labels: app.labels,
            version: app.version,
            deployments: app
                .deployments
                .into_iter()
                .map(|d| DeploymentHandle::new(d.id))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_maps_docker_image_and_deployments() {
        let json = r#"{
            "id": "/web",
            "cpus": 0.5,
            "mem": 128,
            "instances": 2,
            "container": {"type": "DOCKER", "docker": {"image": "nginx:1.25"}},
            "version": "2024-01-01T00:00:00.000Z",
            "deployments": [{"id": "d-1"}]
        }"#;
        let app: Application = serde_json::from_str::<MarathonApp>(json).unwrap().into();

        assert_eq!(app.image.as_deref(), Some("nginx:1.25"));
        assert_eq!(app.mem, 128.0);
        assert_eq!(app.deployments, vec![DeploymentHandle::new("d-1")]);
    }

    #[test]
    fn deployment_normalizes_affected_apps() {
        let json = r#"{"id": "d-2", "affectedApps": ["/web", "db"], "steps": []}"#;
        let summary: DeploymentSummary =
            serde_json::from_str::<MarathonDeployment>(json).unwrap().into();

        assert!(summary.affects(&AppId::parse("/db").unwrap()));
        assert_eq!(summary.affected_apps.len(), 2);
    }

    #[test]
    fn deployment_ref_reads_camel_case() {
        let r: DeploymentRef =
            serde_json::from_str(r#"{"deploymentId": "d-3", "version": "v9"}"#).unwrap();
        assert_eq!(r.deployment_id, "d-3");
        assert_eq!(r.version.as_deref(), Some("v9"));
    }
}
