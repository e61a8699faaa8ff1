//! Console Event Sink
//!
//! Writes one human-readable progress line per workflow step.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{WorkflowEvent, WorkflowEventSink};

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    /// Progress on stderr; `verbose` also reports each poll
    pub fn stderr(verbose: bool) -> Self {
        Self::with_writer(io::stderr(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

/// Progress text for an event
pub fn describe(event: &WorkflowEvent) -> String {
    match event {
        WorkflowEvent::Submitting { source } => format!("Submitting {}", source),
        WorkflowEvent::ExistingApplication { id, force: true } => {
            format!("Application {} exists, updating", id)
        }
        WorkflowEvent::ExistingApplication { id, force: false } => {
            format!("Application {} exists", id)
        }
        WorkflowEvent::StoppingDeployment { id, handle } => {
            format!("Cancelling deployment {} of {}", handle, id)
        }
        WorkflowEvent::Updating { id } => format!("Updating {}", id),
        WorkflowEvent::RollbackTarget { id, version } => {
            format!("Rolling back {} to {}", id, version)
        }
        WorkflowEvent::Waiting { handle, timeout } => format!(
            "Waiting for deployment {} (up to {}s)",
            handle,
            timeout.as_secs()
        ),
        WorkflowEvent::Polled { handle, elapsed } => {
            format!("  {} still running after {}s", handle, elapsed.as_secs())
        }
        WorkflowEvent::WaitFinished { handle, outcome } => {
            format!("Deployment {} {}", handle, outcome.replace('_', " "))
        }
    }
}

impl WorkflowEventSink for ConsoleEventSink {
    fn on_event(&self, event: WorkflowEvent) {
        self.line(describe(&event));
    }

    fn wants_poll_events(&self) -> bool {
        self.verbose
    }
}
