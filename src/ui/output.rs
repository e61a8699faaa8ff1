use crossterm::style::Stylize;

use crate::ui::context::UiContext;

/// Print config and environment warnings to stderr (suppressed in JSON mode)
pub fn print_config_warnings(ui: &UiContext, warnings: &[String]) {
    if ui.json {
        for warning in warnings {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "message": warning,
            }));
        }
        return;
    }

    for warning in warnings {
        eprintln!("{}", format_warning(warning, ui.color, ui.unicode));
    }
}

pub fn format_warning(message: &str, color: bool, unicode: bool) -> String {
    let icon = if unicode { "⚠" } else { "[WARN]" };
    let icon = if color {
        icon.yellow().to_string()
    } else {
        icon.to_string()
    };
    format!("{} {}", icon, message)
}
