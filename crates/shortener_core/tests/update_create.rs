use std::sync::Once;
use std::time::Duration;

use pretty_assertions::assert_eq;
use shortener_core::{
    texts, update, AppState, Effect, FailureKind, LinkRecord, Msg, StatusKind, SUBMIT_LABEL_BUSY,
    SUBMIT_LABEL_IDLE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(shortener_logging::initialize_for_tests);
}

fn activated() -> AppState {
    let (state, _) = update(AppState::new(), Msg::Activated);
    state
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn record(id: &str, code: &str) -> LinkRecord {
    LinkRecord {
        id: id.to_string(),
        original_url: format!("https://example.com/{id}"),
        short_url: format!("http://localhost:8000/{code}"),
        short_code: code.to_string(),
    }
}

#[test]
fn empty_submit_makes_no_call_and_no_change() {
    init_logging();
    let state = activated();
    let before = state.view();

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view(), before);

    let (state, effects) = submit(state, "   ");
    assert!(effects.is_empty());
    assert!(state.status().is_none());
    assert!(!state.is_submitting());
}

#[test]
fn submit_enters_submitting_and_issues_create() {
    init_logging();
    let state = activated();
    let generation = state.generation();

    let (state, effects) = submit(state, "  http://x.com ");

    assert_eq!(
        effects,
        vec![Effect::Create {
            generation,
            original_url: "http://x.com".to_string(),
        }]
    );
    let view = state.view();
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label, SUBMIT_LABEL_BUSY);
}

#[test]
fn second_submit_while_submitting_is_ignored() {
    init_logging();
    let (state, _) = submit(activated(), "http://x.com");
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert!(state.is_submitting());
}

#[test]
fn failed_create_keeps_input_and_reports_error() {
    init_logging();
    let (state, _) = submit(activated(), "http://x.com");
    let generation = state.generation();

    let (state, effects) = update(
        state,
        Msg::CreateFinished {
            generation,
            result: Err(FailureKind::NetworkFailure),
        },
    );

    assert_eq!(state.input(), "http://x.com");
    assert!(!state.is_submitting());
    assert_eq!(state.view().submit_label, SUBMIT_LABEL_IDLE);
    let status = state.status().expect("status message");
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, texts::CREATE_FAILED);
    assert_eq!(
        effects,
        vec![Effect::ScheduleStatusExpiry {
            id: status.id,
            after: Duration::from_millis(3000),
        }]
    );
}

#[test]
fn successful_create_clears_input_then_reloads() {
    init_logging();
    let (state, _) = submit(activated(), "http://x.com");
    let generation = state.generation();

    let (state, effects) = update(
        state,
        Msg::CreateFinished {
            generation,
            result: Ok(()),
        },
    );

    assert_eq!(state.input(), "");
    assert!(!state.is_submitting());
    let status = state.status().expect("status message").clone();
    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(status.text, texts::CREATED);
    assert_eq!(
        effects,
        vec![
            Effect::ScheduleStatusExpiry {
                id: status.id,
                after: Duration::from_millis(3000),
            },
            Effect::ListAll {
                generation,
                request: 2,
            },
        ]
    );
}

#[test]
fn created_record_appears_exactly_once_after_reload() {
    init_logging();
    let (state, _) = submit(activated(), "https://example.com/1");
    let generation = state.generation();
    let (state, effects) = update(
        state,
        Msg::CreateFinished {
            generation,
            result: Ok(()),
        },
    );
    let request = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ListAll { request, .. } => Some(*request),
            _ => None,
        })
        .expect("reload effect");

    let (state, _) = update(
        state,
        Msg::ListLoaded {
            generation,
            request,
            result: Ok(vec![record("1", "abc")]),
        },
    );

    let matching = state.links().iter().filter(|link| link.id == "1").count();
    assert_eq!(matching, 1);
    assert_eq!(state.view().rows[0].number, 1);
}

#[test]
fn invalid_url_is_blocked_locally() {
    init_logging();
    let (state, effects) = submit(activated(), "not a url");

    assert_eq!(effects.len(), 1);
    assert!(matches!(effects[0], Effect::ScheduleStatusExpiry { .. }));
    assert!(!state.is_submitting());
    assert_eq!(state.input(), "not a url");
    assert_eq!(state.status().map(|s| s.text.as_str()), Some(texts::INVALID_URL));
}

#[test]
fn submit_clears_previous_status() {
    init_logging();
    let (state, _) = update(
        activated(),
        Msg::CopyClicked {
            short_url: "http://localhost:8000/abc".to_string(),
        },
    );
    assert!(state.status().is_some());

    let (state, _) = submit(state, "http://x.com");
    assert!(state.status().is_none());
}

#[test]
fn copy_writes_clipboard_and_posts_short_lived_success() {
    init_logging();
    let (state, effects) = update(
        activated(),
        Msg::CopyClicked {
            short_url: "http://localhost:8000/abc".to_string(),
        },
    );

    let status = state.status().expect("status");
    assert_eq!(status.text, texts::COPIED);
    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(
        effects,
        vec![
            Effect::CopyToClipboard {
                text: "http://localhost:8000/abc".to_string(),
            },
            Effect::ScheduleStatusExpiry {
                id: status.id,
                after: Duration::from_millis(2000),
            },
        ]
    );
}

#[test]
fn stale_expiry_does_not_clear_newer_message() {
    init_logging();
    let (state, first) = update(
        activated(),
        Msg::CopyClicked {
            short_url: "http://localhost:8000/abc".to_string(),
        },
    );
    let first_id = match first[1] {
        Effect::ScheduleStatusExpiry { id, .. } => id,
        ref other => panic!("unexpected effect {other:?}"),
    };

    let (state, _) = update(state, Msg::DeleteClicked { short_code: None });
    let (state, _) = update(state, Msg::StatusExpired { id: first_id });

    assert_eq!(
        state.status().map(|s| s.text.as_str()),
        Some(texts::SHORT_CODE_MISSING)
    );

    let current = state.status().expect("status").id;
    let (state, _) = update(state, Msg::StatusExpired { id: current });
    assert!(state.status().is_none());
}
