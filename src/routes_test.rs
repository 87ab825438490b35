use std::path::PathBuf;

use axum::Json;
use axum::extract::RawQuery;
use axum::http::Uri;
use axum::routing::post;
use serde_json::{Value, json};

use super::*;

const INDEX_HTML: &str = "<!doctype html><div id=\"app\"></div>";

fn dist_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("processmart-dist-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.join("app.js"), "console.log('processmart');").unwrap();
    dir
}

fn config(dist_dir: PathBuf, api_upstream: Option<String>) -> HostConfig {
    HostConfig { port: 0, dist_dir, api_upstream }
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Stand-in backend that echoes what it received.
fn fake_backend() -> Router {
    Router::new().route(
        "/tareas",
        get(|headers: HeaderMap, RawQuery(query): RawQuery| async move {
            let auth = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()).map(str::to_owned);
            Json(json!({ "auth": auth, "query": query }))
        })
        .post(|Json(body): Json<Value>| async move { (StatusCode::CREATED, Json(json!({ "id": 1, "sent": body }))) }),
    )
    .route("/ml/riesgo", post(|| async { StatusCode::UNAUTHORIZED }))
    .fallback(|uri: Uri| async move { Json(json!({ "path": uri.path(), "query": uri.query() })) })
}

// =============================================================
// static bundle
// =============================================================

#[tokio::test]
async fn healthz_is_ok() {
    let base = spawn(app(&config(dist_dir("healthz"), None))).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn serves_index_and_assets() {
    let base = spawn(app(&config(dist_dir("assets"), None))).await;

    let root = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(root.status(), StatusCode::OK);
    assert_eq!(root.text().await.unwrap(), INDEX_HTML);

    let asset = reqwest::get(format!("{base}/app.js")).await.unwrap();
    assert_eq!(asset.status(), StatusCode::OK);
    assert!(asset.text().await.unwrap().contains("processmart"));
}

#[tokio::test]
async fn unknown_paths_fall_back_to_index() {
    let base = spawn(app(&config(dist_dir("fallback"), None))).await;
    let resp = reqwest::get(format!("{base}/tareas/123")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), INDEX_HTML);
}

// =============================================================
// API proxy
// =============================================================

#[tokio::test]
async fn api_without_upstream_is_not_found() {
    let base = spawn(app(&config(dist_dir("no-upstream"), None))).await;
    let resp = reqwest::get(format!("{base}/api/tareas")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bare_api_prefix_without_upstream_is_not_found() {
    let base = spawn(app(&config(dist_dir("no-upstream-bare"), None))).await;
    for path in ["/api", "/api/"] {
        let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{path}");
        assert_ne!(resp.text().await.unwrap(), INDEX_HTML, "{path}");
    }
}

#[tokio::test]
async fn proxy_keeps_encoded_segments_intact() {
    let backend = spawn(fake_backend()).await;
    let base = spawn(app(&config(dist_dir("proxy-encoded"), Some(backend)))).await;

    let resp = reqwest::get(format!("{base}/api/tareas/a%3Fx%3D1%2Fb")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "path": "/tareas/a%3Fx%3D1%2Fb", "query": null }));
}

#[tokio::test]
async fn proxy_forwards_bare_prefix_to_upstream_root() {
    let backend = spawn(fake_backend()).await;
    let base = spawn(app(&config(dist_dir("proxy-bare"), Some(backend)))).await;

    let resp = reqwest::get(format!("{base}/api?a=1")).await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "path": "/", "query": "a=1" }));
}

#[tokio::test]
async fn proxy_forwards_auth_and_query() {
    let backend = spawn(fake_backend()).await;
    let base = spawn(app(&config(dist_dir("proxy-get"), Some(backend)))).await;

    let resp = reqwest::Client::new()
        .get(format!("{base}/api/tareas?estado=pendiente"))
        .header(AUTHORIZATION, "Bearer tok")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "auth": "Bearer tok", "query": "estado=pendiente" }));
}

#[tokio::test]
async fn proxy_forwards_body_and_status() {
    let backend = spawn(fake_backend()).await;
    let base = spawn(app(&config(dist_dir("proxy-post"), Some(backend)))).await;
    let client = reqwest::Client::new();

    let created = client.post(format!("{base}/api/tareas")).json(&json!({ "titulo": "Cierre" })).send().await.unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let body: Value = created.json().await.unwrap();
    assert_eq!(body["sent"]["titulo"], "Cierre");

    let denied = client.post(format!("{base}/api/ml/riesgo")).send().await.unwrap();
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let base = spawn(app(&config(dist_dir("dead-upstream"), Some(dead)))).await;
    let resp = reqwest::get(format!("{base}/api/tareas")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://b:8000/", "tareas/3", None), "http://b:8000/tareas/3");
    assert_eq!(upstream_url("http://b:8000", "/tareas", Some("a=1")), "http://b:8000/tareas?a=1");
    assert_eq!(upstream_url("http://b:8000", "tareas", Some("")), "http://b:8000/tareas");
    assert_eq!(upstream_url("http://b:8000", "", None), "http://b:8000/");
    assert_eq!(upstream_url("http://b:8000", "/t/a%2Fb", None), "http://b:8000/t/a%2Fb");
}
