use super::*;
use serde_json::json;

#[test]
fn task_accepts_numeric_and_string_ids() {
    let numeric: Task = serde_json::from_value(json!({
        "id": 7,
        "titulo": "Cerrar mes",
        "area_id": 3,
        "asignado_a": null
    }))
    .unwrap();
    assert_eq!(numeric.id, "7");
    assert_eq!(numeric.area_id.as_deref(), Some("3"));
    assert_eq!(numeric.asignado_a, None);

    let text: Task = serde_json::from_value(json!({ "id": "t-9", "titulo": "x", "area_id": "a-1" })).unwrap();
    assert_eq!(text.id, "t-9");
    assert_eq!(text.area_id.as_deref(), Some("a-1"));
}

#[test]
fn task_defaults_missing_optional_fields() {
    let task: Task = serde_json::from_value(json!({ "id": 1, "titulo": "x" })).unwrap();
    assert_eq!(task.estado, TaskStatus::Pendiente);
    assert_eq!(task.prioridad, Priority::Media);
    assert_eq!(task.descripcion, "");
    assert_eq!(task.fecha_limite, None);
    assert_eq!(task.duracion_estimada, None);
}

#[test]
fn task_rejects_object_id() {
    let err = serde_json::from_value::<Task>(json!({ "id": {"x": 1}, "titulo": "x" })).unwrap_err();
    assert!(err.to_string().contains("expected string or number id"));
}

#[test]
fn task_status_uses_snake_case_on_the_wire() {
    assert_eq!(serde_json::to_value(TaskStatus::EnProgreso).unwrap(), json!("en_progreso"));
    let status: TaskStatus = serde_json::from_value(json!("completada")).unwrap();
    assert_eq!(status, TaskStatus::Completada);
}

#[test]
fn task_status_keys_match_serde_names() {
    for status in TaskStatus::ALL {
        assert_eq!(serde_json::to_value(status).unwrap(), json!(status.key()));
        assert_eq!(TaskStatus::from_key(status.key()), Some(status));
    }
    assert_eq!(TaskStatus::from_key("todas"), None);
}

#[test]
fn task_status_advance_stops_at_terminal_states() {
    assert_eq!(TaskStatus::Pendiente.advance(), TaskStatus::EnProgreso);
    assert_eq!(TaskStatus::EnProgreso.advance(), TaskStatus::Completada);
    assert_eq!(TaskStatus::Completada.advance(), TaskStatus::Completada);
    assert_eq!(TaskStatus::Bloqueada.advance(), TaskStatus::Bloqueada);
}

#[test]
fn priority_keys_match_serde_names() {
    for priority in Priority::ALL {
        assert_eq!(serde_json::to_value(priority).unwrap(), json!(priority.key()));
    }
    assert_eq!(Priority::from_key("critica"), Some(Priority::Critica));
    assert_eq!(Priority::from_key("urgente"), None);
}

#[test]
fn new_task_omits_unset_optionals() {
    let body = NewTask { titulo: "Auditar".to_owned(), ..NewTask::default() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "titulo": "Auditar", "descripcion": "", "prioridad": "media" })
    );
}

#[test]
fn task_update_serializes_only_changed_fields() {
    let update = TaskUpdate { estado: Some(TaskStatus::Completada), asignado_a: None };
    assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "estado": "completada" }));
}

#[test]
fn login_response_accepts_access_token_alias() {
    let resp: LoginResponse = serde_json::from_value(json!({ "access_token": "abc" })).unwrap();
    assert_eq!(resp.token.as_deref(), Some("abc"));
    assert!(resp.usuario.is_none());

    let empty: LoginResponse = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty, LoginResponse::default());
}

#[test]
fn user_and_area_parse_backend_shapes() {
    let user: User = serde_json::from_value(json!({
        "id": 4, "nombre": "Ana", "email": "ana@example.com", "rol": "analista", "area_id": 2
    }))
    .unwrap();
    assert_eq!(user.id, "4");
    assert_eq!(user.area_id.as_deref(), Some("2"));

    let area: Area = serde_json::from_value(json!({ "id": 2, "nombre": "Finanzas" })).unwrap();
    assert_eq!(area.descripcion, "");
}
