//! Output Rendering
//!
//! Provides a unified interface for rendering results as text or NDJSON.
//! Renderers return strings; the binary decides where they go.

use crossterm::style::Stylize;
use serde::Serialize;
use serde_json::{json, Value};

use crate::application::{
    DeploymentResult, ResolvedDescriptor, Submission, SubmitKind, WaitOutcome, WaitReport,
};
use crate::domain::entities::{Application, VersionHistory};
use crate::domain::value_objects::AppId;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    arrow: &'static str,
    pending: &'static str,
    stop: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            arrow: "→",
            pending: "○",
            stop: "■",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            arrow: "->",
            pending: "[..]",
            stop: "[STOP]",
        }
    }
}

/// Trait for rendering workflow results
pub trait ResultRenderer {
    fn submission(&self, command: &str, submission: &Submission) -> String;

    fn deployment(&self, command: &str, id: &AppId, result: &DeploymentResult) -> String;

    fn preview(&self, resolved: &ResolvedDescriptor) -> String;

    fn applications(&self, apps: &[Application]) -> String;

    fn application(&self, app: &Application) -> String;

    fn versions(&self, id: &AppId, history: &VersionHistory) -> String;
}

/// Text renderer for workflow results
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn success(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn notice(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn wait_line(&self, report: &WaitReport) -> String {
        let icons = self.icons();
        let secs = report.elapsed.as_secs_f64();
        match report.outcome {
            WaitOutcome::Completed => format!(
                "{} Deployment finished after {:.1}s",
                self.success(icons.check),
                secs
            ),
            WaitOutcome::TimedOut => format!(
                "{} Stopped waiting after {:.1}s; the deployment continues on the server",
                self.notice(icons.pending),
                secs
            ),
            WaitOutcome::Cancelled => format!(
                "{} Wait cancelled after {:.1}s; the deployment continues on the server",
                self.notice(icons.pending),
                secs
            ),
        }
    }
}

fn summary_line(app: &Application) -> String {
    let mut line = format!(
        "cpus {}  mem {}  instances {}",
        app.cpus, app.mem, app.instances
    );
    if let Some(image) = &app.image {
        line.push_str(&format!("  image {}", image));
    }
    line
}

impl ResultRenderer for TextRenderer {
    fn submission(&self, command: &str, submission: &Submission) -> String {
        let icons = self.icons();
        let app = &submission.application;
        let verb = match (command, submission.kind) {
            ("rollback", _) => "Rolled back",
            (_, SubmitKind::Created) => "Created",
            (_, SubmitKind::Updated) => "Updated",
        };

        let mut lines = Vec::new();
        let mut head = format!("{} {} {}", self.success(icons.check), verb, app.id);
        if let Some(version) = &app.version {
            head.push_str(&format!(" (version {})", version));
        }
        lines.push(head);
        lines.push(format!("  {}", summary_line(app)));
        for handle in &submission.stopped {
            lines.push(format!("  {} cancelled deployment {}", icons.stop, handle));
        }
        for handle in &app.deployments {
            lines.push(format!("  {} deployment {}", icons.arrow, handle));
        }
        if let Some(report) = &submission.wait {
            lines.push(self.wait_line(report));
        }
        lines.join("\n") + "\n"
    }

    fn deployment(&self, command: &str, id: &AppId, result: &DeploymentResult) -> String {
        let icons = self.icons();
        let verb = match command {
            "scale" => "Scaling",
            "restart" => "Restarting",
            "destroy" => "Destroying",
            _ => "Deploying",
        };

        let mut lines = vec![format!(
            "{} {} {} {} deployment {}",
            self.success(icons.check),
            verb,
            id,
            icons.arrow,
            result.handle
        )];
        if let Some(report) = &result.wait {
            lines.push(self.wait_line(report));
        }
        lines.join("\n") + "\n"
    }

    fn preview(&self, resolved: &ResolvedDescriptor) -> String {
        let mut out = resolved.text.clone();
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }

    fn applications(&self, apps: &[Application]) -> String {
        if apps.is_empty() {
            return "No applications\n".to_string();
        }

        let id_width = apps
            .iter()
            .map(|a| a.id.as_str().len())
            .max()
            .unwrap_or(0)
            .max("ID".len());

        let mut out = format!(
            "{:<id_width$}  {:>6}  {:>8}  {:>9}  {}\n",
            "ID", "CPUS", "MEM", "INSTANCES", "VERSION"
        );
        for app in apps {
            out.push_str(&format!(
                "{:<id_width$}  {:>6}  {:>8}  {:>9}  {}\n",
                app.id.as_str(),
                app.cpus,
                app.mem,
                app.instances,
                app.version.as_deref().unwrap_or("-")
            ));
        }
        out
    }

    fn application(&self, app: &Application) -> String {
        let mut lines = vec![app.id.to_string(), format!("  {}", summary_line(app))];
        if let Some(cmd) = &app.cmd {
            lines.push(format!("  cmd {}", cmd));
        }
        if let Some(version) = &app.version {
            lines.push(format!("  version {}", version));
        }
        for (key, value) in &app.labels {
            lines.push(format!("  label {}={}", key, value));
        }
        for handle in &app.deployments {
            lines.push(format!("  {} deployment {}", self.icons().arrow, handle));
        }
        lines.join("\n") + "\n"
    }

    fn versions(&self, id: &AppId, history: &VersionHistory) -> String {
        if history.is_empty() {
            return format!("No versions recorded for {}\n", id);
        }
        let mut out = String::new();
        for (index, version) in history.versions.iter().enumerate() {
            let marker = if index == 0 { " (current)" } else { "" };
            out.push_str(&format!("{}{}\n", version, marker));
        }
        out
    }
}

/// JSON renderer for workflow results
pub struct JsonRenderer;

impl JsonRenderer {
    fn event(event: &str, command: &str, payload: impl Serialize) -> String {
        let mut value = serde_json::to_value(payload).unwrap_or(Value::Null);
        let mut object = match value.take() {
            Value::Object(map) => map,
            other => {
                let mut map = serde_json::Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        object.insert("event".to_string(), json!(event));
        object.insert("command".to_string(), json!(command));
        Value::Object(object).to_string() + "\n"
    }
}

impl ResultRenderer for JsonRenderer {
    fn submission(&self, command: &str, submission: &Submission) -> String {
        Self::event("result", command, submission)
    }

    fn deployment(&self, command: &str, id: &AppId, result: &DeploymentResult) -> String {
        Self::event(
            "result",
            command,
            json!({
                "id": id,
                "deployment": result.handle.id,
                "wait": result.wait,
            }),
        )
    }

    fn preview(&self, resolved: &ResolvedDescriptor) -> String {
        Self::event(
            "preview",
            "create",
            json!({
                "source": resolved.source,
                "descriptor": resolved.text,
                "unresolved": resolved.unresolved,
            }),
        )
    }

    fn applications(&self, apps: &[Application]) -> String {
        Self::event("result", "list", json!({ "apps": apps }))
    }

    fn application(&self, app: &Application) -> String {
        Self::event("result", "get", json!({ "app": app }))
    }

    fn versions(&self, id: &AppId, history: &VersionHistory) -> String {
        Self::event(
            "result",
            "versions",
            json!({ "id": id, "versions": history.versions }),
        )
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, color: bool, unicode: bool) -> Box<dyn ResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { color, unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
