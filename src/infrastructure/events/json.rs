//! JSON Event Sink
//!
//! Outputs workflow events as NDJSON for CI/automation consumption.

use crate::domain::ports::{WorkflowEvent, WorkflowEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl WorkflowEventSink for JsonEventSink {
    fn on_event(&self, event: WorkflowEvent) {
        let command = self.command;
        let json = match event {
            WorkflowEvent::Submitting { source } => serde_json::json!({
                "event": "submitting",
                "command": command,
                "source": source,
            }),

            WorkflowEvent::ExistingApplication { id, force } => serde_json::json!({
                "event": "existing_application",
                "command": command,
                "id": id,
                "force": force,
            }),

            WorkflowEvent::StoppingDeployment { id, handle } => serde_json::json!({
                "event": "stopping_deployment",
                "command": command,
                "id": id,
                "deployment": handle.id,
            }),

            WorkflowEvent::Updating { id } => serde_json::json!({
                "event": "updating",
                "command": command,
                "id": id,
            }),

            WorkflowEvent::RollbackTarget { id, version } => serde_json::json!({
                "event": "rollback_target",
                "command": command,
                "id": id,
                "version": version,
            }),

            WorkflowEvent::Waiting { handle, timeout } => serde_json::json!({
                "event": "waiting",
                "command": command,
                "deployment": handle.id,
                "timeout_secs": timeout.as_secs_f64(),
            }),

            WorkflowEvent::Polled { handle, elapsed } => serde_json::json!({
                "event": "polled",
                "command": command,
                "deployment": handle.id,
                "elapsed_secs": elapsed.as_secs_f64(),
            }),

            WorkflowEvent::WaitFinished { handle, outcome } => serde_json::json!({
                "event": "wait_finished",
                "command": command,
                "deployment": handle.id,
                "outcome": outcome,
            }),
        };

        self.write_event(json);
    }
}
