//! In-memory fakes shared by the application-layer tests

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::wait::{DeploymentWaiter, WaitSettings};
use super::workflow::AppWorkflow;
use crate::domain::entities::{
    Application, ApplicationPatch, ApplicationUpdate, DeploymentHandle, DeploymentSummary,
    DescriptorRequest, VersionHistory,
};
use crate::domain::ports::{
    CancelToken, Clock, FileSystem, FsError, FsResult, OrchestratorClient, OrchestratorError,
    OrchestratorResult, WorkflowEvent, WorkflowEventSink,
};
use crate::domain::value_objects::AppId;

fn app_id(raw: &str) -> AppId {
    AppId::parse(raw).unwrap()
}

/// Descriptor request with no parameters
pub fn descriptor(text: &str) -> DescriptorRequest {
    DescriptorRequest::new("app.json", text)
}

/// Workflow over `client` with a 10s default timeout and 2s polls
pub fn workflow(client: &FakeOrchestrator) -> AppWorkflow<&FakeOrchestrator, FakeClock> {
    let waiter = DeploymentWaiter::new(
        FakeClock::new(),
        WaitSettings {
            default_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_secs(2),
        },
        CancelToken::new(),
    );
    AppWorkflow::new(client, waiter)
}

/// Clock whose `sleep` advances time instantly
#[derive(Clone)]
pub struct FakeClock {
    start: Instant,
    offset: Rc<Cell<Duration>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.start + self.offset.get()
    }

    fn sleep(&self, duration: Duration) {
        self.offset.set(self.offset.get() + duration);
    }
}

#[derive(Clone, Default)]
pub struct MemoryFs {
    files: HashMap<PathBuf, String>,
}

impl MemoryFs {
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

#[derive(Default)]
pub struct RecordingSink {
    events: RefCell<Vec<WorkflowEvent>>,
    polls: bool,
}

impl RecordingSink {
    /// Sink that also records poll events
    pub fn with_polls() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            polls: true,
        }
    }

    pub fn events(&self) -> Vec<WorkflowEvent> {
        self.events.borrow().clone()
    }
}

impl WorkflowEventSink for RecordingSink {
    fn on_event(&self, event: WorkflowEvent) {
        self.events.borrow_mut().push(event);
    }

    fn wants_poll_events(&self) -> bool {
        self.polls
    }
}

struct FakeDeployment {
    summary: DeploymentSummary,
    remaining_polls: u32,
}

#[derive(Default)]
struct FakeState {
    apps: BTreeMap<String, Application>,
    versions: HashMap<String, Vec<String>>,
    deployments: Vec<FakeDeployment>,
    calls: Vec<&'static str>,
    next_deployment: u32,
    rejection: Option<(u16, String)>,
    last_patch: Option<ApplicationPatch>,
    last_filter: Option<String>,
}

/// In-memory orchestrator that counts calls
///
/// With `with_deploy_polls(n)`, every state-changing call starts a
/// deployment that stays in the active set for `n` polls.
#[derive(Default)]
pub struct FakeOrchestrator {
    state: RefCell<FakeState>,
    deploy_polls: Option<u32>,
    fail_polls: Cell<bool>,
}

impl FakeOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app(self, id: &str) -> Self {
        let id = app_id(id);
        self.state
            .borrow_mut()
            .apps
            .insert(id.to_string(), Application::new(id));
        self
    }

    /// Set version history, newest first
    pub fn with_versions(self, id: &str, versions: &[&str]) -> Self {
        self.state.borrow_mut().versions.insert(
            app_id(id).to_string(),
            versions.iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    pub fn with_deploy_polls(mut self, polls: u32) -> Self {
        self.deploy_polls = Some(polls);
        self
    }

    /// Register an in-flight deployment visible for `remaining_polls` polls
    pub fn start_deployment(&self, app: &str, remaining_polls: u32) -> DeploymentHandle {
        let mut state = self.state.borrow_mut();
        state.next_deployment += 1;
        let handle = DeploymentHandle::new(format!("deploy-{}", state.next_deployment));
        state.deployments.push(FakeDeployment {
            summary: DeploymentSummary {
                handle: handle.clone(),
                affected_apps: vec![app_id(app)],
            },
            remaining_polls,
        });
        handle
    }

    pub fn reject_next(&self, status: u16, message: &str) {
        self.state.borrow_mut().rejection = Some((status, message.to_string()));
    }

    pub fn fail_polls(&self) {
        self.fail_polls.set(true);
    }

    pub fn calls(&self, name: &str) -> usize {
        self.state.borrow().calls.iter().filter(|c| **c == name).count()
    }

    pub fn total_calls(&self) -> usize {
        self.state.borrow().calls.len()
    }

    pub fn call_order(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    pub fn is_active(&self, handle: &DeploymentHandle) -> bool {
        self.state
            .borrow()
            .deployments
            .iter()
            .any(|d| &d.summary.handle == handle && d.remaining_polls > 0)
    }

    pub fn app(&self, id: &str) -> Option<Application> {
        self.state.borrow().apps.get(app_id(id).as_str()).cloned()
    }

    pub fn last_patch(&self) -> Option<ApplicationPatch> {
        self.state.borrow().last_patch.clone()
    }

    pub fn last_filter(&self) -> Option<String> {
        self.state.borrow().last_filter.clone()
    }

    fn record(&self, call: &'static str) -> OrchestratorResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        match state.rejection.take() {
            Some((status, message)) => Err(OrchestratorError::Rejected { status, message }),
            None => Ok(()),
        }
    }

    /// Start a deployment for `id` when deploy polls are configured
    fn deploy(&self, id: &AppId) -> Vec<DeploymentHandle> {
        match self.deploy_polls {
            Some(polls) => vec![self.start_deployment(id.as_str(), polls)],
            None => Vec::new(),
        }
    }

    fn deploy_handle(&self, id: &AppId) -> DeploymentHandle {
        self.deploy(id)
            .pop()
            .unwrap_or_else(|| DeploymentHandle::new(format!("deploy-{}-done", id.path_segment())))
    }

    fn decode(request: &DescriptorRequest) -> OrchestratorResult<Application> {
        let text = request
            .submission_text()
            .map_err(|e| OrchestratorError::Descriptor {
                source_name: request.source.clone(),
                message: e.to_string(),
            })?;
        serde_json::from_str(&text).map_err(|e| OrchestratorError::Descriptor {
            source_name: request.source.clone(),
            message: e.to_string(),
        })
    }

    fn missing(id: &AppId) -> OrchestratorError {
        OrchestratorError::NotFound { id: id.to_string() }
    }
}

impl OrchestratorClient for FakeOrchestrator {
    fn create_application(&self, request: &DescriptorRequest) -> OrchestratorResult<Application> {
        self.record("create_application")?;
        let mut app = Self::decode(request)?;
        if self.state.borrow().apps.contains_key(app.id.as_str()) {
            return Err(OrchestratorError::AlreadyExists { id: app.id });
        }
        app.deployments = self.deploy(&app.id);
        self.state
            .borrow_mut()
            .apps
            .insert(app.id.to_string(), app.clone());
        Ok(app)
    }

    fn update_application(&self, update: &ApplicationUpdate) -> OrchestratorResult<Application> {
        self.record("update_application")?;
        let mut app = match update {
            ApplicationUpdate::Descriptor(request) => Self::decode(request)?,
            ApplicationUpdate::Patch(patch) => {
                self.state.borrow_mut().last_patch = Some(patch.clone());
                let mut app = self
                    .state
                    .borrow()
                    .apps
                    .get(patch.id.as_str())
                    .cloned()
                    .ok_or_else(|| Self::missing(&patch.id))?;
                app.apply(patch);
                app
            }
        };
        app.deployments = self.deploy(&app.id);
        self.state
            .borrow_mut()
            .apps
            .insert(app.id.to_string(), app.clone());
        Ok(app)
    }

    fn get_application(&self, id: &AppId) -> OrchestratorResult<Application> {
        self.record("get_application")?;
        self.state
            .borrow()
            .apps
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| Self::missing(id))
    }

    fn list_applications(&self, filter: Option<&str>) -> OrchestratorResult<Vec<Application>> {
        self.record("list_applications")?;
        let mut state = self.state.borrow_mut();
        state.last_filter = filter.map(str::to_string);
        Ok(state
            .apps
            .values()
            .filter(|app| filter.map_or(true, |f| app.id.as_str().contains(f)))
            .cloned()
            .collect())
    }

    fn list_versions(&self, id: &AppId) -> OrchestratorResult<VersionHistory> {
        self.record("list_versions")?;
        self.state
            .borrow()
            .versions
            .get(id.as_str())
            .cloned()
            .map(VersionHistory::new)
            .ok_or_else(|| Self::missing(id))
    }

    fn scale_application(&self, id: &AppId, instances: u32) -> OrchestratorResult<DeploymentHandle> {
        self.record("scale_application")?;
        self.state
            .borrow_mut()
            .apps
            .get_mut(id.as_str())
            .ok_or_else(|| Self::missing(id))?
            .instances = instances;
        Ok(self.deploy_handle(id))
    }

    fn restart_application(&self, id: &AppId, _force: bool) -> OrchestratorResult<DeploymentHandle> {
        self.record("restart_application")?;
        if !self.state.borrow().apps.contains_key(id.as_str()) {
            return Err(Self::missing(id));
        }
        Ok(self.deploy_handle(id))
    }

    fn destroy_application(&self, id: &AppId) -> OrchestratorResult<DeploymentHandle> {
        self.record("destroy_application")?;
        self.state
            .borrow_mut()
            .apps
            .remove(id.as_str())
            .ok_or_else(|| Self::missing(id))?;
        Ok(self.deploy_handle(id))
    }

    fn active_deployments(&self) -> OrchestratorResult<Vec<DeploymentSummary>> {
        self.record("active_deployments")?;
        if self.fail_polls.get() {
            return Err(OrchestratorError::Transport("connection refused".to_string()));
        }
        let mut state = self.state.borrow_mut();
        let active = state
            .deployments
            .iter()
            .filter(|d| d.remaining_polls > 0)
            .map(|d| d.summary.clone())
            .collect();
        for deployment in &mut state.deployments {
            deployment.remaining_polls = deployment.remaining_polls.saturating_sub(1);
        }
        Ok(active)
    }

    fn cancel_deployment(&self, handle: &DeploymentHandle) -> OrchestratorResult<()> {
        self.record("cancel_deployment")?;
        self.state
            .borrow_mut()
            .deployments
            .retain(|d| &d.summary.handle != handle);
        Ok(())
    }
}
