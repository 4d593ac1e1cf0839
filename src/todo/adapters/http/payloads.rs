//! JSON bodies accepted and produced by the HTTP adapter.

use crate::todo::{
    domain::TodoId,
    services::{CreateTodoRequest, UpdateTodoRequest},
};
use serde::{Deserialize, Serialize};

/// Body of `POST /todos`.
///
/// A missing title deserializes as empty and is rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreateTodoPayload {
    /// Title of the new todo.
    #[serde(default)]
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
    /// Optional priority string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl From<CreateTodoPayload> for CreateTodoRequest {
    fn from(payload: CreateTodoPayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            priority: payload.priority,
        }
    }
}

/// Body of `PUT /todos/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateTodoPayload {
    /// Replacement title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement priority string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl UpdateTodoPayload {
    /// Binds the payload to the todo named in the path.
    #[must_use]
    pub fn into_request(self, id: TodoId) -> UpdateTodoRequest {
        UpdateTodoRequest {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
        }
    }
}

/// Body returned after a todo is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Identifier of the new todo.
    pub id: String,
}

/// Body returned after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
