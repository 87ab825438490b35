use super::*;
use serde_json::json;

#[test]
fn scalar_result_uses_root_key() {
    assert_eq!(flatten_result(&json!("alto")), vec![(ROOT_KEY.to_owned(), "alto".to_owned())]);
    assert_eq!(flatten_result(&json!(null)), vec![(ROOT_KEY.to_owned(), "—".to_owned())]);
}

#[test]
fn nested_objects_use_dotted_keys() {
    let rows = flatten_result(&json!({
        "riesgo": "alto",
        "detalle": { "probabilidad": 0.876, "modelo": "catboost" }
    }));
    assert!(rows.contains(&("riesgo".to_owned(), "alto".to_owned())));
    assert!(rows.contains(&("detalle.probabilidad".to_owned(), "0.88".to_owned())));
    assert!(rows.contains(&("detalle.modelo".to_owned(), "catboost".to_owned())));
}

#[test]
fn arrays_use_indexed_keys() {
    let rows = flatten_result(&json!([{ "actividad": "Aprobación", "espera_horas": 12 }, true]));
    assert_eq!(
        rows,
        vec![
            ("[0].actividad".to_owned(), "Aprobación".to_owned()),
            ("[0].espera_horas".to_owned(), "12".to_owned()),
            ("[1]".to_owned(), "sí".to_owned()),
        ]
    );
}

#[test]
fn empty_containers_are_shown_as_values() {
    assert_eq!(
        flatten_result(&json!({ "cuellos": [], "meta": {} })),
        vec![("cuellos".to_owned(), "[]".to_owned()), ("meta".to_owned(), "{}".to_owned())]
    );
}
