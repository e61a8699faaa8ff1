use crossterm::style::Stylize;
use deckhand::domain::ports::OrchestratorError;
use deckhand::domain::services::TemplateError;
use deckhand::DeckhandError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};

/// Suggested next step for errors the user can act on
fn hint(err: &DeckhandError) -> Option<String> {
    match err {
        DeckhandError::Template(TemplateError::MissingParameter(name)) => Some(format!(
            "Pass it with '-p {}=<value>', add it to the --env-file, or use --ignore-missing",
            name
        )),
        DeckhandError::InsufficientHistory { id, .. } => Some(format!(
            "List versions with 'deckhand app versions {}' and pass one explicitly",
            id
        )),
        DeckhandError::Submission(OrchestratorError::Transport(_))
        | DeckhandError::Wait {
            source: OrchestratorError::Transport(_),
            ..
        } => Some(
            "Check --host, DECKHAND_MARATHON_URL or [marathon] url in the config file".to_string(),
        ),
        DeckhandError::Submission(OrchestratorError::Rejected { status: 401, .. })
        | DeckhandError::Submission(OrchestratorError::Rejected { status: 403, .. }) => Some(
            "Set DECKHAND_MARATHON_USER and DECKHAND_MARATHON_PASSWORD".to_string(),
        ),
        DeckhandError::Unconfirmed { id, .. } => Some(format!(
            "The change is live on the server; follow it with 'deckhand app get {}'",
            id
        )),
        DeckhandError::Submission(OrchestratorError::Rejected { status: 409, .. }) => {
            Some("A deployment is in progress; retry with --stop-deploys to cancel it".to_string())
        }
        _ => None,
    }
}

/// Short machine-readable name of the error class
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<DeckhandError>() {
        Some(DeckhandError::Usage(_)) => "usage",
        Some(DeckhandError::FileRead { .. }) => "file_read",
        Some(DeckhandError::Config { .. }) => "config",
        Some(DeckhandError::Template(_)) => "template",
        Some(DeckhandError::AlreadyExists { .. }) => "already_exists",
        Some(DeckhandError::InvalidArgument { .. }) => "invalid_argument",
        Some(DeckhandError::InsufficientHistory { .. }) => "insufficient_history",
        Some(DeckhandError::Submission(OrchestratorError::NotFound { .. })) => "not_found",
        Some(DeckhandError::Submission(_)) => "submission",
        Some(DeckhandError::Wait { .. }) | Some(DeckhandError::Unconfirmed { .. }) => "wait",
        None => "internal",
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = if supports_unicode { "✗" } else { "[ERROR]" };
    let icon = if supports_color {
        icon.red().bold().to_string()
    } else {
        icon.to_string()
    };

    let mut out = format!("{} {}\n", icon, err);
    let causes: Vec<String> = err.chain().skip(1).map(|c| c.to_string()).collect();
    for cause in causes {
        if !out.contains(&cause) {
            out.push_str(&format!("  caused by: {}\n", cause));
        }
    }

    if let Some(hint) = err.downcast_ref::<DeckhandError>().and_then(hint) {
        let label = if supports_color {
            "Fix:".cyan().to_string()
        } else {
            "Fix:".to_string()
        };
        out.push_str(&format!("  {} {}\n", label, hint));
    }
    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let local = err
            .downcast_ref::<DeckhandError>()
            .map(DeckhandError::is_local)
            .unwrap_or(false);
        let output = serde_json::json!({
            "event": "error",
            "kind": error_kind(err),
            "local": local,
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_github_actions {
        println!(
            "{}",
            github_actions_annotation(AnnotationLevel::Error, &err.to_string(), Some("Deckhand"))
        );
    }

    eprint!("{}", format_error_with(err, caps.supports_color, caps.supports_unicode));
}
