use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::router::CancelToken;
use crate::session::{MemorySession, SessionState};

fn recording_scope() -> (PageScope, CancelToken, Rc<RefCell<Vec<String>>>) {
    let token = CancelToken::new();
    let navigations = Rc::new(RefCell::new(Vec::new()));
    let sink = navigations.clone();
    let scope = PageScope::new(token.clone(), Rc::new(move |path: &str| sink.borrow_mut().push(path.to_owned())));
    (scope, token, navigations)
}

// =============================================================
// registry
// =============================================================

#[test]
fn registry_registers_every_page() {
    let table = registry().unwrap();
    assert_eq!(table.len(), PagePath::ALL.len());
    assert_eq!(table.paths().collect::<Vec<_>>(), PagePath::ALL.to_vec());
}

#[test]
fn registry_guards_everything_but_login() {
    let table = registry().unwrap();
    for path in PagePath::ALL {
        let route = table.get(path).unwrap();
        assert_eq!(route.requires_auth, path != PagePath::Login, "{path}");
        assert!(route.init.is_some(), "{path} has no init");
    }
}

// =============================================================
// failure_message
// =============================================================

#[test]
fn unauthorized_failure_ends_session_and_goes_to_login() {
    let session = MemorySession::new(true);
    session.sign_in(Some("tok")).unwrap();
    let mut target = None;
    let message = failure_message(&ApiError::Unauthorized, &session, |p| target = Some(p.to_owned()));
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(target.as_deref(), Some("login"));
    assert_eq!(message, "La sesión expiró. Inicia sesión de nuevo.");
}

#[test]
fn other_failures_keep_the_session() {
    let session = MemorySession::new(true);
    let mut navigated = false;
    let message = failure_message(&ApiError::Status(500), &session, |_| navigated = true);
    assert!(session.is_authenticated());
    assert!(!navigated);
    assert!(message.contains("500"), "{message}");
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_stores_success_while_mounted() {
    let (scope, _token, _nav) = recording_scope();
    let session = MemorySession::new(true);
    let mut stored = None;
    assert!(settle(&scope, &session, Ok(vec![1, 2]), |v| stored = Some(v)));
    assert_eq!(stored, Some(Loadable::Ready(vec![1, 2])));
}

#[test]
fn settle_drops_responses_after_unmount() {
    let (scope, token, nav) = recording_scope();
    let session = MemorySession::new(true);
    token.cancel();
    let mut stored: Option<Loadable<u8>> = None;
    assert!(!settle(&scope, &session, Err(ApiError::Unauthorized), |v| stored = Some(v)));
    assert!(stored.is_none());
    assert!(session.is_authenticated());
    assert!(nav.borrow().is_empty());
}

#[test]
fn settle_stops_follow_ups_on_expired_session() {
    let (scope, _token, nav) = recording_scope();
    let session = MemorySession::new(true);
    let mut stored: Option<Loadable<u8>> = None;
    assert!(!settle(&scope, &session, Err(ApiError::Unauthorized), |v| stored = Some(v)));
    assert!(matches!(stored, Some(Loadable::Failed(_))));
    assert_eq!(*nav.borrow(), vec!["login".to_owned()]);
}

#[test]
fn settle_continues_after_ordinary_failure() {
    let (scope, _token, nav) = recording_scope();
    let session = MemorySession::new(true);
    let mut stored: Option<Loadable<u8>> = None;
    assert!(settle(&scope, &session, Err(ApiError::Status(503)), |v| stored = Some(v)));
    assert!(stored.and_then(|s| s.error().map(str::to_owned)).is_some_and(|m| m.contains("503")));
    assert!(nav.borrow().is_empty());
}
