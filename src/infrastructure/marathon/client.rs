//! Marathon HTTP client
//!
//! Blocking `reqwest` client implementing `OrchestratorClient` over the
//! Marathon v2 REST API.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::wire::{
    AppEnvelope, AppsEnvelope, DeploymentRef, ErrorBody, MarathonApp, MarathonDeployment,
    VersionsEnvelope,
};
use crate::domain::entities::{
    Application, ApplicationUpdate, DeploymentHandle, DeploymentSummary, DescriptorRequest,
    VersionHistory,
};
use crate::domain::ports::{OrchestratorClient, OrchestratorError, OrchestratorResult};
use crate::domain::value_objects::AppId;
use crate::infrastructure::descriptor::{decode_descriptor, DecodedDescriptor};

pub const DEFAULT_MARATHON_URL: &str = "http://localhost:8080";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a Marathon endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarathonSettings {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub request_timeout: Duration,
}

impl Default for MarathonSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_MARATHON_URL.to_string(),
            username: None,
            password: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

pub struct MarathonClient {
    http: Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl MarathonClient {
    pub fn new(settings: &MarathonSettings) -> OrchestratorResult<Self> {
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| OrchestratorError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.url.trim_end_matches('/').to_string(),
            username: settings.username.clone().filter(|u| !u.is_empty()),
            password: settings.password.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, "marathon request");
        let builder = self
            .http
            .request(method, url)
            .header("Accept", "application/json");
        match &self.username {
            Some(user) => builder.basic_auth(user, self.password.as_deref()),
            None => builder,
        }
    }

    fn send(&self, builder: RequestBuilder) -> OrchestratorResult<Response> {
        let response = builder
            .send()
            .map_err(|e| OrchestratorError::Transport(e.to_string()))?;
        debug!(status = response.status().as_u16(), "marathon response");
        Ok(response)
    }

    /// Map non-2xx responses to errors; `subject` names the resource for 404s
    fn check(response: Response, subject: &str) -> OrchestratorResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(OrchestratorError::NotFound {
                id: subject.to_string(),
            });
        }
        let body = response.text().unwrap_or_default();
        Err(OrchestratorError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        })
    }

    fn decode<T: DeserializeOwned>(response: Response) -> OrchestratorResult<T> {
        response
            .json()
            .map_err(|e| OrchestratorError::Decode(e.to_string()))
    }

    fn call<T: DeserializeOwned>(&self, builder: RequestBuilder, subject: &str) -> OrchestratorResult<T> {
        let response = self.send(builder)?;
        Self::decode(Self::check(response, subject)?)
    }

    fn app_path(id: &AppId) -> String {
        format!("/v2/apps{}", id)
    }

    /// Substitute parameters carried by the request, then decode
    fn prepare(request: &DescriptorRequest) -> OrchestratorResult<DecodedDescriptor> {
        let text = request
            .submission_text()
            .map_err(|e| OrchestratorError::Descriptor {
                source_name: request.source.clone(),
                message: e.to_string(),
            })?;
        decode_descriptor(&request.source, &text)
    }

    fn put_app(&self, id: &AppId, body: &serde_json::Value) -> OrchestratorResult<DeploymentRef> {
        self.call(
            self.request(Method::PUT, &Self::app_path(id)).json(body),
            id.as_str(),
        )
    }
}

/// Human-readable reason from a Marathon error body
fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
        }) => message,
        _ if body.trim().is_empty() => "no response body".to_string(),
        _ => body.chars().take(200).collect(),
    }
}

impl OrchestratorClient for MarathonClient {
    fn create_application(&self, request: &DescriptorRequest) -> OrchestratorResult<Application> {
        let decoded = Self::prepare(request)?;
        let response = self.send(self.request(Method::POST, "/v2/apps").json(&decoded.body))?;
        if response.status() == StatusCode::CONFLICT {
            return Err(OrchestratorError::AlreadyExists { id: decoded.id });
        }
        let app: MarathonApp = Self::decode(Self::check(response, decoded.id.as_str())?)?;
        Ok(app.into())
    }

    fn update_application(&self, update: &ApplicationUpdate) -> OrchestratorResult<Application> {
        let (id, body) = match update {
            ApplicationUpdate::Descriptor(request) => {
                let decoded = Self::prepare(request)?;
                (decoded.id, serde_json::Value::Object(decoded.body))
            }
            ApplicationUpdate::Patch(patch) => (
                patch.id.clone(),
                serde_json::to_value(patch).map_err(|e| OrchestratorError::Decode(e.to_string()))?,
            ),
        };

        let started = self.put_app(&id, &body)?;
        let mut application = self.get_application(&id)?;
        let handle = DeploymentHandle::new(started.deployment_id);
        if !application.deployments.contains(&handle) {
            application.deployments.push(handle);
        }
        if application.version.is_none() {
            application.version = started.version;
        }
        Ok(application)
    }

    fn get_application(&self, id: &AppId) -> OrchestratorResult<Application> {
        let envelope: AppEnvelope =
            self.call(self.request(Method::GET, &Self::app_path(id)), id.as_str())?;
        Ok(envelope.app.into())
    }

    fn list_applications(&self, filter: Option<&str>) -> OrchestratorResult<Vec<Application>> {
        let path = match filter {
            Some(filter) => format!("/v2/apps?{}", filter),
            None => "/v2/apps".to_string(),
        };
        let envelope: AppsEnvelope = self.call(self.request(Method::GET, &path), "/v2/apps")?;
        Ok(envelope.apps.into_iter().map(Application::from).collect())
    }

    fn list_versions(&self, id: &AppId) -> OrchestratorResult<VersionHistory> {
        let path = format!("{}/versions", Self::app_path(id));
        let envelope: VersionsEnvelope = self.call(self.request(Method::GET, &path), id.as_str())?;
        Ok(VersionHistory::new(envelope.versions))
    }

    fn scale_application(&self, id: &AppId, instances: u32) -> OrchestratorResult<DeploymentHandle> {
        let started = self.put_app(id, &serde_json::json!({ "instances": instances }))?;
        Ok(DeploymentHandle::new(started.deployment_id))
    }

    fn restart_application(&self, id: &AppId, force: bool) -> OrchestratorResult<DeploymentHandle> {
        let path = format!("{}/restart?force={}", Self::app_path(id), force);
        let started: DeploymentRef = self.call(self.request(Method::POST, &path), id.as_str())?;
        Ok(DeploymentHandle::new(started.deployment_id))
    }

    fn destroy_application(&self, id: &AppId) -> OrchestratorResult<DeploymentHandle> {
        let started: DeploymentRef =
            self.call(self.request(Method::DELETE, &Self::app_path(id)), id.as_str())?;
        Ok(DeploymentHandle::new(started.deployment_id))
    }

    fn active_deployments(&self) -> OrchestratorResult<Vec<DeploymentSummary>> {
        let deployments: Vec<MarathonDeployment> =
            self.call(self.request(Method::GET, "/v2/deployments"), "/v2/deployments")?;
        Ok(deployments.into_iter().map(DeploymentSummary::from).collect())
    }

    fn cancel_deployment(&self, handle: &DeploymentHandle) -> OrchestratorResult<()> {
        let path = format!("/v2/deployments/{}", handle.id);
        let response = self.send(self.request(Method::DELETE, &path))?;
        Self::check(response, &handle.id).map(|_| ())
    }
}
