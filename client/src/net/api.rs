//! REST client for the Processmart backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`]; only URL and
//! payload construction is exercised there.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics. A 401 maps to
//! [`ApiError::Unauthorized`] so pages can end the session and send the user
//! back to the login page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    Area, InferenceResult, LoginRequest, LoginResponse, NewArea, NewTask, NewUser, PerformanceRequest, Task,
    TaskInferenceRequest, TaskUpdate, User,
};
use crate::config::ClientConfig;
use crate::session::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("session expired")]
    Unauthorized,
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Map a response status to success or a typed error.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        other => Err(ApiError::Status(other)),
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Backend client bound to a base URL and an optional bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Api {
    base_url: String,
    token: Option<String>,
}

impl Api {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self { base_url: base_url.into(), token }
    }

    /// Client for the configured backend, authenticated as the stored session.
    pub fn from_session(config: &ClientConfig, session: &impl SessionStore) -> Self {
        Self::new(config.api_base_url.clone(), session.token())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        self.send_json(HttpMethod::Post, "auth/login", Some(&body)).await
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.send_json::<(), _>(HttpMethod::Get, "tareas", None).await
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        self.send_json(HttpMethod::Post, "tareas", Some(task)).await
    }

    pub async fn update_task(&self, id: &str, update: &TaskUpdate) -> Result<Task, ApiError> {
        self.send_json(HttpMethod::Put, &item_path("tareas", id), Some(update)).await
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(HttpMethod::Delete, &item_path("tareas", id)).await
    }

    pub async fn list_areas(&self) -> Result<Vec<Area>, ApiError> {
        self.send_json::<(), _>(HttpMethod::Get, "areas", None).await
    }

    pub async fn create_area(&self, area: &NewArea) -> Result<Area, ApiError> {
        self.send_json(HttpMethod::Post, "areas", Some(area)).await
    }

    pub async fn delete_area(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(HttpMethod::Delete, &item_path("areas", id)).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.send_json::<(), _>(HttpMethod::Get, "usuarios", None).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.send_json(HttpMethod::Post, "usuarios", Some(user)).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(HttpMethod::Delete, &item_path("usuarios", id)).await
    }

    pub async fn classify_risk(&self, tarea_id: &str) -> Result<InferenceResult, ApiError> {
        let body = TaskInferenceRequest { tarea_id: tarea_id.to_owned() };
        self.send_json(HttpMethod::Post, "ml/riesgo", Some(&body)).await
    }

    pub async fn predict_duration(&self, tarea_id: &str) -> Result<InferenceResult, ApiError> {
        let body = TaskInferenceRequest { tarea_id: tarea_id.to_owned() };
        self.send_json(HttpMethod::Post, "ml/duracion", Some(&body)).await
    }

    pub async fn recommend_assignee(&self, tarea_id: &str) -> Result<InferenceResult, ApiError> {
        let body = TaskInferenceRequest { tarea_id: tarea_id.to_owned() };
        self.send_json(HttpMethod::Post, "ml/recomendacion", Some(&body)).await
    }

    pub async fn analyze_performance(&self, usuario_id: &str) -> Result<InferenceResult, ApiError> {
        let body = PerformanceRequest { usuario_id: usuario_id.to_owned() };
        self.send_json(HttpMethod::Post, "ml/rendimiento", Some(&body)).await
    }

    pub async fn detect_bottlenecks(&self) -> Result<InferenceResult, ApiError> {
        self.send_json::<(), _>(HttpMethod::Get, "ml/procesos/cuellos-botella", None).await
    }

    async fn send_json<B, T>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        #[cfg(feature = "csr")]
        {
            let resp = self.send(method, path, body).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn send_empty(&self, method: HttpMethod, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            self.send(method, path, None).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "csr")]
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::{Method, RequestBuilder};

        let method = match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };
        let mut builder = RequestBuilder::new(&self.url(path)).method(method);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &bearer(token));
        }
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if let Err(e) = check_status(resp.status()) {
            log::warn!("{path}: {e}");
            return Err(e);
        }
        Ok(resp)
    }
}

/// Bytes escaped in a single path segment: everything but RFC 3986 unreserved.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

fn item_path(collection: &str, id: &str) -> String {
    format!("{collection}/{}", utf8_percent_encode(id, SEGMENT))
}

fn encode_body<B: Serialize>(body: Option<&B>) -> Result<Option<serde_json::Value>, ApiError> {
    body.map(|b| serde_json::to_value(b).map_err(|e| ApiError::Encode(e.to_string())))
        .transpose()
}
