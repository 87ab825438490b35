//! Wire DTOs for the Processmart backend.
//!
//! DESIGN
//! ======
//! The backend is an opaque JSON service. Identifiers arrive as numbers or
//! strings depending on the table, so they are normalized to `String` on the
//! way in. Inference results stay as raw JSON; only their transport is typed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Task workflow status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pendiente,
    EnProgreso,
    Bloqueada,
    Completada,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] =
        [TaskStatus::Pendiente, TaskStatus::EnProgreso, TaskStatus::Bloqueada, TaskStatus::Completada];

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pendiente => "Pendiente",
            TaskStatus::EnProgreso => "En progreso",
            TaskStatus::Bloqueada => "Bloqueada",
            TaskStatus::Completada => "Completada",
        }
    }

    /// Status reached by the "advance" action; completed and blocked tasks
    /// stay where they are.
    pub fn advance(self) -> TaskStatus {
        match self {
            TaskStatus::Pendiente => TaskStatus::EnProgreso,
            TaskStatus::EnProgreso => TaskStatus::Completada,
            other => other,
        }
    }

    pub fn from_key(key: &str) -> Option<TaskStatus> {
        match key {
            "pendiente" => Some(TaskStatus::Pendiente),
            "en_progreso" => Some(TaskStatus::EnProgreso),
            "bloqueada" => Some(TaskStatus::Bloqueada),
            "completada" => Some(TaskStatus::Completada),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            TaskStatus::Pendiente => "pendiente",
            TaskStatus::EnProgreso => "en_progreso",
            TaskStatus::Bloqueada => "bloqueada",
            TaskStatus::Completada => "completada",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Baja,
    #[default]
    Media,
    Alta,
    Critica,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Baja, Priority::Media, Priority::Alta, Priority::Critica];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Baja => "Baja",
            Priority::Media => "Media",
            Priority::Alta => "Alta",
            Priority::Critica => "Crítica",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Priority::Baja => "baja",
            Priority::Media => "media",
            Priority::Alta => "alta",
            Priority::Critica => "critica",
        }
    }

    pub fn from_key(key: &str) -> Option<Priority> {
        Priority::ALL.into_iter().find(|p| p.key() == key)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub titulo: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub estado: TaskStatus,
    #[serde(default)]
    pub prioridad: Priority,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub area_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub asignado_a: Option<String>,
    /// Due date as `YYYY-MM-DD`.
    #[serde(default)]
    pub fecha_limite: Option<String>,
    /// Estimated duration in hours.
    #[serde(default)]
    pub duracion_estimada: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewTask {
    pub titulo: String,
    pub descripcion: String,
    pub prioridad: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asignado_a: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_limite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duracion_estimada: Option<f64>,
}

/// Partial task update sent with `PUT /tareas/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asignado_a: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Area {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewArea {
    pub nombre: String,
    pub descripcion: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub rol: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub area_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewUser {
    pub nombre: String,
    pub email: String,
    pub rol: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default, alias = "access_token")]
    pub token: Option<String>,
    #[serde(default)]
    pub usuario: Option<User>,
}

/// Body for the task-scoped inference endpoints (risk, duration,
/// recommendation).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskInferenceRequest {
    pub tarea_id: String,
}

/// Body for the performance-analysis endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerformanceRequest {
    pub usuario_id: String,
}

/// Opaque model output, rendered as a key/value listing.
pub type InferenceResult = serde_json::Value;

fn id_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(serde_json::Value::deserialize(deserializer)?)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        other => id_from_value::<D::Error>(other).map(Some),
    }
}
