use shortener_core::{AppViewModel, Consistency, StatusKind, CONFIRM_DELETE_PROMPT};

use super::constants::*;

/// Renders the whole view as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() + 8);

    lines.push(format!("== {TITLE} =="));

    if let Some(status) = &view.status {
        let tag = match status.kind {
            StatusKind::Success => "ok",
            StatusKind::Error => "error",
        };
        lines.push(format!("[{tag}] {}", status.text));
    }

    if view.rows.is_empty() {
        lines.push(EMPTY_STATE.to_string());
    } else {
        let original_width = view
            .rows
            .iter()
            .map(|row| row.original_url.chars().count())
            .max()
            .unwrap_or(0)
            .max("Original URL".len());
        let number_width = view.rows.len().to_string().len();

        lines.push(format!(
            "{:>number_width$} | {:<original_width$} | Short URL",
            "#", "Original URL"
        ));
        for row in &view.rows {
            lines.push(format!(
                "{:>number_width$} | {:<original_width$} | {}",
                row.number, row.original_url, row.short_url
            ));
        }
    }

    if view.consistency == Consistency::Tentative {
        lines.push(SYNCING_HINT.to_string());
    }

    let input = if view.input.is_empty() {
        INPUT_PLACEHOLDER
    } else {
        view.input.as_str()
    };
    let button = if view.submit_enabled {
        format!("[{}]", view.submit_label)
    } else {
        format!("({})", view.submit_label)
    };
    lines.push(format!("> {input} {button}"));

    if view.confirm_prompt {
        lines.push(format!("{CONFIRM_DELETE_PROMPT} {CONFIRM_HINT}"));
    }

    lines
}
