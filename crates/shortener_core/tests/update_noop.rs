use shortener_core::{update, AppState, Msg};

#[test]
fn unknown_status_expiry_preserves_state() {
    let (state, _) = update(AppState::new(), Msg::Activated);
    let (next, effects) = update(state.clone(), Msg::StatusExpired { id: 42 });

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn user_input_is_ignored_before_activation() {
    let state = AppState::new();
    let before = state.view();

    let (state, effects) = update(state, Msg::InputChanged("https://example.com".to_string()));
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
}
