use super::*;
use serde_json::json;

#[test]
fn begin_clears_previous_outcome() {
    let mut state = InferenceState { result: Some(json!({"riesgo": "alto"})), ..Default::default() };
    assert!(state.begin());
    assert!(state.running);
    assert!(state.result.is_none());
}

#[test]
fn begin_is_refused_while_running() {
    let mut state = InferenceState::default();
    assert!(state.begin());
    assert!(!state.begin());
}

#[test]
fn finish_records_result_or_error() {
    let mut state = InferenceState::default();
    state.begin();
    state.finish(Ok(json!({"horas": 3.5})));
    assert!(!state.running);
    assert_eq!(state.result, Some(json!({"horas": 3.5})));

    state.begin();
    state.finish(Err("server responded with status 500".to_owned()));
    assert_eq!(state.error.as_deref(), Some("server responded with status 500"));
    assert!(state.result.is_none());
}

#[test]
fn reject_shows_message_without_running() {
    let mut state = InferenceState::default();
    state.reject("Selecciona un elemento primero.");
    assert!(!state.running);
    assert_eq!(state.error.as_deref(), Some("Selecciona un elemento primero."));
}
