use super::*;
use crate::net::types::{Priority, TaskStatus};

fn task(id: &str, titulo: &str) -> Task {
    Task {
        id: id.to_owned(),
        titulo: titulo.to_owned(),
        descripcion: String::new(),
        estado: TaskStatus::Pendiente,
        prioridad: Priority::Media,
        area_id: None,
        asignado_a: None,
        fecha_limite: None,
        duracion_estimada: None,
    }
}

fn area(id: &str) -> Area {
    Area { id: id.to_owned(), nombre: format!("Área {id}"), descripcion: String::new() }
}

// =============================================================
// Loadable
// =============================================================

#[test]
fn loadable_defaults_to_idle_with_no_items() {
    let state: Loadable<Vec<Task>> = Loadable::default();
    assert_eq!(state, Loadable::Idle);
    assert!(state.items().is_empty());
    assert!(!state.is_loading());
    assert!(state.error().is_none());
}

#[test]
fn loadable_from_result_keeps_error_text() {
    let ok: Loadable<u8> = Loadable::from_result::<String>(Ok(3));
    assert_eq!(ok.ready(), Some(&3));
    let failed: Loadable<u8> = Loadable::from_result(Err("sin conexión"));
    assert_eq!(failed.error(), Some("sin conexión"));
}

#[test]
fn refresh_keeps_loaded_items_visible() {
    let mut state = Loadable::Ready(vec![task("1", "a")]);
    state.begin_refresh();
    assert_eq!(state.items().len(), 1);

    let mut failed: Loadable<Vec<Task>> = Loadable::Failed("x".to_owned());
    failed.begin_refresh();
    assert!(failed.is_loading());
}

// =============================================================
// CatalogState
// =============================================================

#[test]
fn upsert_task_replaces_by_id_and_appends_new() {
    let mut catalog = CatalogState { tasks: Loadable::Ready(vec![task("1", "a")]), ..Default::default() };
    catalog.upsert_task(task("1", "renombrada"));
    catalog.upsert_task(task("2", "b"));
    let titles: Vec<&str> = catalog.tasks.items().iter().map(|t| t.titulo.as_str()).collect();
    assert_eq!(titles, vec!["renombrada", "b"]);
}

#[test]
fn upsert_into_unloaded_list_starts_it() {
    let mut catalog = CatalogState::default();
    catalog.upsert_area(area("a"));
    assert_eq!(catalog.areas.items().len(), 1);
}

#[test]
fn remove_drops_only_matching_ids() {
    let mut catalog = CatalogState {
        tasks: Loadable::Ready(vec![task("1", "a"), task("2", "b")]),
        areas: Loadable::Ready(vec![area("a"), area("b")]),
        ..Default::default()
    };
    catalog.remove_task("1");
    catalog.remove_area("b");
    catalog.remove_user("nobody");
    assert_eq!(catalog.tasks.items().iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), vec!["2"]);
    assert_eq!(catalog.areas.items().iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(catalog.users, Loadable::Idle);
}
