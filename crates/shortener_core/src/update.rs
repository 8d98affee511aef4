use std::time::Duration;

use url::Url;

use crate::{AppState, Effect, Msg, StatusKind};

pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete this URL?";

/// User-facing status texts.
pub mod texts {
    pub const CREATED: &str = "URL shortened successfully!";
    pub const CREATE_FAILED: &str = "Error shortening URL!";
    pub const INVALID_URL: &str = "Please enter a valid URL!";
    pub const COPIED: &str = "Copied to clipboard!";
    pub const SHORT_CODE_MISSING: &str = "Cannot delete: Short code is missing!";
    pub const DELETED: &str = "URL deleted successfully!";
    pub const DELETE_FAILED: &str = "Failed to delete URL!";
}

const LONG_LIFETIME: Duration = Duration::from_millis(3000);
const SHORT_LIFETIME: Duration = Duration::from_millis(2000);

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // Lifecycle messages are handled regardless of whether the view is live.
    match msg {
        Msg::Activated => {
            state.activate();
            let load = state.begin_list();
            return (state, vec![load]);
        }
        Msg::TornDown => {
            if state.is_active() {
                state.tear_down();
            }
            return (state, Vec::new());
        }
        Msg::StatusExpired { id } => {
            state.expire_status(id);
            return (state, Vec::new());
        }
        _ if !state.is_active() => return (state, Vec::new()),
        _ => {}
    }

    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::CreateFinished { generation, result } => {
            if !state.accepts(generation) {
                return (state, Vec::new());
            }
            state.set_submitting(false);
            match result {
                Ok(()) => {
                    state.clear_input();
                    state.fence_older_lists();
                    let expiry =
                        state
                            .feedback_mut()
                            .post(texts::CREATED, StatusKind::Success, LONG_LIFETIME);
                    vec![expiry, state.begin_list()]
                }
                Err(_) => vec![state.feedback_mut().post(
                    texts::CREATE_FAILED,
                    StatusKind::Error,
                    LONG_LIFETIME,
                )],
            }
        }
        Msg::CopyClicked { short_url } => {
            let expiry = state
                .feedback_mut()
                .post(texts::COPIED, StatusKind::Success, SHORT_LIFETIME);
            vec![Effect::CopyToClipboard { text: short_url }, expiry]
        }
        Msg::DeleteClicked { short_code } => {
            if state.pending_delete().is_some() {
                return (state, Vec::new());
            }
            match short_code.filter(|code| !code.is_empty()) {
                Some(code) => {
                    state.set_pending_delete(Some(code));
                    Vec::new()
                }
                None => vec![state.feedback_mut().post(
                    texts::SHORT_CODE_MISSING,
                    StatusKind::Error,
                    LONG_LIFETIME,
                )],
            }
        }
        Msg::DeleteConfirmed => match state.take_pending_delete() {
            Some(short_code) => vec![Effect::Delete {
                generation: state.generation(),
                short_code,
            }],
            None => Vec::new(),
        },
        Msg::DeleteCancelled => {
            state.take_pending_delete();
            Vec::new()
        }
        Msg::DeleteFinished {
            generation,
            short_code,
            result,
        } => {
            if !state.accepts(generation) {
                return (state, Vec::new());
            }
            match result {
                Ok(()) => {
                    state.remove_tentatively(&short_code);
                    let expiry =
                        state
                            .feedback_mut()
                            .post(texts::DELETED, StatusKind::Success, SHORT_LIFETIME);
                    vec![expiry, state.begin_list()]
                }
                Err(_) => vec![state.feedback_mut().post(
                    texts::DELETE_FAILED,
                    StatusKind::Error,
                    LONG_LIFETIME,
                )],
            }
        }
        Msg::ListLoaded {
            generation,
            request,
            result,
        } => {
            // Load failures keep the current list and stay silent.
            if let (true, Ok(links)) = (state.accepts(generation), result) {
                state.replace_links(request, links);
            }
            Vec::new()
        }
        Msg::Activated | Msg::TornDown | Msg::StatusExpired { .. } => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    if state.is_submitting() || state.pending_delete().is_some() {
        return Vec::new();
    }
    let url = state.input().trim().to_owned();
    if url.is_empty() {
        return Vec::new();
    }
    if !is_submittable_url(&url) {
        return vec![state.feedback_mut().post(
            texts::INVALID_URL,
            StatusKind::Error,
            LONG_LIFETIME,
        )];
    }

    state.feedback_mut().clear();
    state.set_submitting(true);
    vec![Effect::Create {
        generation: state.generation(),
        original_url: url,
    }]
}

fn is_submittable_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}
