//! HTTP helpers for the task API and the session endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending the
//! ambient session cookie (`credentials: include`).
//! Server-side (SSR) and native tests: stubs returning
//! [`ApiError::Unavailable`] / [`SessionError::Unavailable`], since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so API failures degrade UI
//! behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::graphql::{self, IdVariables, LoginVariables, NoVariables, SignupVariables, TaskVariables};
#[cfg(any(test, feature = "hydrate"))]
use super::types::SessionStatus;
use super::types::{AuthPayload, Task, User};
use crate::config;
use crate::state::session::{SessionError, SessionOracle};

/// Why a task API call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("{}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("response contained no data")]
    MissingData,

    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_session_status(status: u16, body: &str) -> Result<bool, SessionError> {
    if !(200..300).contains(&status) {
        return Err(SessionError::Status(status));
    }
    serde_json::from_str::<SessionStatus>(body)
        .map(|s| s.authenticated)
        .map_err(|e| SessionError::Malformed(e.to_string()))
}

/// Cookie-based session check against `GET /auth/check-session`.
#[derive(Clone, Debug)]
pub struct HttpSessionOracle {
    endpoint: String,
}

impl HttpSessionOracle {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpSessionOracle {
    fn default() -> Self {
        Self::new(config::session_endpoint())
    }
}

#[async_trait(?Send)]
impl SessionOracle for HttpSessionOracle {
    async fn check_session(&self) -> Result<bool, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| SessionError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| SessionError::Network(e.to_string()))?;
            decode_session_status(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SessionError::Unavailable)
        }
    }
}

/// Run one GraphQL operation against the configured endpoint.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures, non-2xx responses without a
/// GraphQL envelope, undecodable bodies, and any GraphQL `errors`.
#[cfg(feature = "hydrate")]
async fn execute<V, T>(query: &str, variables: V) -> Result<T, ApiError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let endpoint = config::graphql_endpoint();
    let body = graphql::GraphQlRequest { query, variables };
    let resp = gloo_net::http::Request::post(&endpoint)
        .credentials(web_sys::RequestCredentials::Include)
        .json(&body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let result = graphql::decode_response(status, &text);
    if let Err(e) = &result {
        leptos::logging::warn!("graphql operation failed: {e}");
    }
    result
}

#[cfg(not(feature = "hydrate"))]
async fn execute<V, T>(query: &str, variables: V) -> Result<T, ApiError> {
    let _ = (query, variables);
    Err(ApiError::Unavailable)
}

/// Fetch the signed-in user's tasks (`myTasks`).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_my_tasks() -> Result<Vec<Task>, ApiError> {
    let data: graphql::MyTasksData = execute(graphql::MY_TASKS, NoVariables {}).await?;
    Ok(data.my_tasks)
}

/// Fetch the signed-in user (`me`). `Ok(None)` when the API knows no user.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_me() -> Result<Option<User>, ApiError> {
    let data: graphql::MeData = execute(graphql::ME, NoVariables {}).await?;
    Ok(data.me)
}

/// Log in with email and password; the API sets the session cookie.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn login(variables: LoginVariables) -> Result<AuthPayload, ApiError> {
    let data: graphql::LoginData = execute(graphql::LOGIN, variables).await?;
    Ok(data.login)
}

/// Create an account.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn signup(variables: SignupVariables) -> Result<AuthPayload, ApiError> {
    let data: graphql::SignupData = execute(graphql::SIGNUP, variables).await?;
    Ok(data.signup)
}

/// Create a task, or update it when `variables.id` is set.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn save_task(variables: TaskVariables) -> Result<Task, ApiError> {
    if variables.id.is_some() {
        let data: graphql::UpdateTaskData = execute(graphql::UPDATE_TASK, variables).await?;
        Ok(data.update_task)
    } else {
        let data: graphql::CreateTaskData = execute(graphql::CREATE_TASK, variables).await?;
        Ok(data.create_task)
    }
}

/// Delete a task by id.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    let _: graphql::DeleteTaskData = execute(graphql::DELETE_TASK, IdVariables { id: id.to_owned() }).await?;
    Ok(())
}

/// End the session server-side.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn logout() -> Result<(), ApiError> {
    let _: graphql::LogoutData = execute(graphql::LOGOUT, NoVariables {}).await?;
    Ok(())
}

/// Round-trip `{ __typename }` to prove the API is reachable.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn test_connection() -> Result<String, ApiError> {
    let data: graphql::TypenameData = execute(graphql::TEST_CONNECTION, NoVariables {}).await?;
    Ok(data.typename)
}
