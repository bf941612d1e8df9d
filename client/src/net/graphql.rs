//! GraphQL documents and envelope types for the task API.
//!
//! DESIGN
//! ======
//! Every operation is a `{ query, variables }` POST and every answer a
//! `{ data, errors }` envelope. Documents are plain string constants; each has
//! a typed variables struct and a typed `data` struct so callers never touch
//! raw JSON.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::api::ApiError;
use super::types::{AuthPayload, Task, TaskStatus, User};

pub const MY_TASKS: &str = r"
query MyTasks {
  myTasks {
    id
    title
    description
    status
    createdAt
    user {
      id
      name
      email
    }
  }
}";

pub const ME: &str = r"
query Me {
  me {
    id
    name
    email
  }
}";

pub const LOGIN: &str = r"
mutation Login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    user {
      id
      name
      email
    }
    token
  }
}";

pub const SIGNUP: &str = r"
mutation Signup($name: String!, $email: String!, $password: String!) {
  signup(name: $name, email: $email, password: $password) {
    token
    user {
      id
      name
      email
    }
  }
}";

pub const CREATE_TASK: &str = r"
mutation CreateTask($title: String!, $description: String!, $status: String!) {
  createTask(title: $title, description: $description, status: $status) {
    id
    title
    description
    status
  }
}";

pub const UPDATE_TASK: &str = r"
mutation UpdateTask($id: ID!, $title: String!, $description: String!, $status: String!) {
  updateTask(id: $id, title: $title, description: $description, status: $status) {
    id
    title
    description
    status
  }
}";

pub const DELETE_TASK: &str = r"
mutation DeleteTask($id: ID!) {
  deleteTask(id: $id)
}";

pub const LOGOUT: &str = r"
mutation Logout {
  logout
}";

pub const TEST_CONNECTION: &str = r"
query TestConnection {
  __typename
}";

/// Outgoing request body.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// One entry of the response `errors` array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
}

/// Incoming response body.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorEntry>,
}

impl<T> GraphQlResponse<T> {
    /// Any reported error fails the whole operation, even with partial data.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            return Err(ApiError::GraphQl(self.errors.into_iter().map(|e| e.message).collect()));
        }
        self.data.ok_or(ApiError::MissingData)
    }
}

/// Decode an HTTP response carrying a GraphQL envelope.
///
/// GraphQL servers often report resolver errors with a 4xx/5xx status *and* a
/// valid envelope, so the envelope's messages win over the bare status.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<GraphQlResponse<T>>(body) {
        Ok(envelope) if (200..300).contains(&status) || !envelope.errors.is_empty() => envelope.into_result(),
        Ok(_) => Err(ApiError::Status(status)),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

// =============================================================
// Variables
// =============================================================

#[derive(Clone, Copy, Debug, Serialize)]
pub struct NoVariables {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginVariables {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupVariables {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Variables for `createTask` (no `id`) and `updateTask` (with `id`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaskVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdVariables {
    pub id: String,
}

// =============================================================
// Response data
// =============================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyTasksData {
    pub my_tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
pub struct MeData {
    pub me: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub login: AuthPayload,
}

#[derive(Debug, Deserialize)]
pub struct SignupData {
    pub signup: AuthPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskData {
    pub create_task: Task,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskData {
    pub update_task: Task,
}

/// `deleteTask` and `logout` return bare scalars whose exact type the client
/// does not rely on.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskData {
    pub delete_task: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct LogoutData {
    pub logout: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct TypenameData {
    #[serde(rename = "__typename")]
    pub typename: String,
}
