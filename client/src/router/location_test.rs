use super::*;

#[test]
fn strip_hash_removes_single_leading_hash() {
    assert_eq!(strip_hash("#riesgo"), "riesgo");
    assert_eq!(strip_hash("riesgo"), "riesgo");
    assert_eq!(strip_hash("##x"), "#x");
    assert_eq!(strip_hash(""), "");
    assert_eq!(strip_hash("#"), "");
}

#[test]
fn memory_location_starts_without_pending_events() {
    let loc = MemoryLocation::new("#tareas");
    assert_eq!(loc.fragment(), "tareas");
    assert_eq!(loc.pending_events(), 0);
    assert!(!loc.take_event());
}

#[test]
fn set_fragment_queues_one_event_per_write() {
    let loc = MemoryLocation::new("");
    loc.set_fragment("login");
    loc.set_fragment("login");
    assert_eq!(loc.fragment(), "login");
    assert_eq!(loc.pending_events(), 2);
    assert!(loc.take_event());
    assert!(loc.take_event());
    assert!(!loc.take_event());
}

#[test]
fn clones_share_fragment_and_history() {
    let loc = MemoryLocation::new("");
    let other = loc.clone();
    other.set_fragment("#areas");
    assert_eq!(loc.fragment(), "areas");
    assert_eq!(loc.history(), vec!["areas".to_owned()]);
}
