//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{AppWorkflow, CreateUseCase, DeploymentWaiter};
use crate::config::Config;
use crate::domain::ports::{CancelToken, WorkflowEventSink};
use crate::error::DeckhandResult;
use crate::infrastructure::{
    ConsoleEventSink, JsonEventSink, LocalFs, MarathonClient, SystemClock,
};

/// Type alias for the workflow against a live Marathon
pub type ConcreteWorkflow = AppWorkflow<MarathonClient, SystemClock>;

/// Type alias for the create pipeline reading local files
pub type ConcreteCreateUseCase = CreateUseCase<LocalFs>;

/// Create the workflow engine
///
/// `host` overrides the configured Marathon URL.
pub fn create_workflow(
    config: &Config,
    host: Option<&str>,
    cancel: CancelToken,
    events: Arc<dyn WorkflowEventSink>,
) -> DeckhandResult<ConcreteWorkflow> {
    let mut settings = config.marathon_settings();
    if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
        settings.url = host.to_string();
    }

    let client = MarathonClient::new(&settings)?;
    let waiter = DeploymentWaiter::new(SystemClock, config.wait_settings(), cancel);
    Ok(AppWorkflow::new(client, waiter).with_events(events))
}

pub fn create_create_use_case() -> ConcreteCreateUseCase {
    CreateUseCase::new(LocalFs::new())
}

/// Progress sink: NDJSON on stdout in JSON mode, text on stderr otherwise
pub fn create_event_sink(json: bool, command: &'static str, verbose: u8) -> Arc<dyn WorkflowEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::stderr(verbose > 0))
    }
}
