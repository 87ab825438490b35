use super::*;
use std::cell::RefCell;

#[test]
fn cancel_token_starts_live() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn cancel_token_clones_share_state() {
    let token = CancelToken::new();
    let clone = token.clone();
    token.cancel();
    assert!(clone.is_cancelled());
}

#[test]
fn page_scope_reports_token_state() {
    let token = CancelToken::new();
    let scope = PageScope::new(token.clone(), Rc::new(|_| {}));
    assert!(!scope.is_cancelled());
    token.cancel();
    assert!(scope.is_cancelled());
    assert!(scope.token().is_cancelled());
}

#[test]
fn page_scope_forwards_navigation() {
    let seen = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = seen.clone();
    let scope = PageScope::new(CancelToken::new(), Rc::new(move |p: &str| sink.borrow_mut().push(p.to_owned())));
    scope.navigate("tareas");
    scope.navigate("dashboard");
    assert_eq!(*seen.borrow(), vec!["tareas".to_owned(), "dashboard".to_owned()]);
}
