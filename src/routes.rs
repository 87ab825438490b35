//! Router assembly for the static host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the built client bundle. Any path that is not a file falls back to
//! `index.html`; client routing happens in the URL fragment, which never
//! reaches the server, so the fallback only matters for stray deep links.
//!
//! When an upstream is configured, `/api/*` is passed through to the backend
//! so the bundle can use a same-origin base URL. Upstream failures surface as
//! `502 Bad Gateway`. Without an upstream every `/api` path, the bare prefix
//! included, answers `404` instead of the bundle.
//!
//! The path after `/api` is forwarded exactly as received, percent-encoding
//! intact, so an encoded `?` or `/` inside a segment stays inside it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Request headers passed through to the backend.
const FORWARDED_HEADERS: [axum::http::HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

#[derive(Clone)]
struct ProxyState {
    upstream: Option<String>,
    http: reqwest::Client,
}

pub fn app(config: &HostConfig) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let index = config.dist_dir.join("index.html");
    let bundle = ServeDir::new(&config.dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index));
    let state = ProxyState { upstream: config.api_upstream.clone(), http: reqwest::Client::new() };

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api", any(proxy))
        .route("/api/", any(proxy))
        .route("/api/{*rest}", any(proxy))
        .with_state(state)
        .fallback_service(bundle)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Backend URL for a proxied `/api/{rest}` request. `rest` is joined as is
/// and must still be percent-encoded.
pub fn upstream_url(upstream: &str, rest: &str, query: Option<&str>) -> String {
    let base = format!("{}/{}", upstream.trim_end_matches('/'), rest.trim_start_matches('/'));
    match query {
        Some(q) if !q.is_empty() => format!("{base}?{q}"),
        _ => base,
    }
}

async fn proxy(
    State(state): State<ProxyState>,
    OriginalUri(uri): OriginalUri,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(upstream) = state.upstream.as_deref() else {
        return (StatusCode::NOT_FOUND, "API upstream not configured").into_response();
    };
    let rest = uri.path().strip_prefix("/api").unwrap_or_default();
    let url = upstream_url(upstream, rest, uri.query());

    let mut request = state.http.request(method, &url).body(body);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name, value);
        }
    }

    let upstream_resp = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, %url, "upstream request failed");
            return (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response();
        }
    };
    let status = upstream_resp.status();
    let content_type = upstream_resp.headers().get(CONTENT_TYPE).cloned();
    let bytes = match upstream_resp.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, %url, "upstream body read failed");
            return (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response();
        }
    };

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}
