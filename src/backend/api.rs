//! HTTP clients for the agent server and the tool runner

use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;

use super::types::{parse_tool_users, parse_user_list, AgentRequest, NlRequest, ToolRunRequest, User};
use crate::error::{ApiError, Result};

/// Client for the FastAPI agent server (`/api/nl`, `/api/users`, `/api/users/nl`)
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run a free-text prompt through the agent
    pub async fn run_agent(&self, request: &AgentRequest) -> Result<Value> {
        let url = format!("{}/api/nl", self.base_url);
        tracing::debug!(server = %request.server_name, "POST {}", url);
        let response = self.client.post(&url).json(request).send().await?;
        read_json(response).await
    }

    /// Fetch the current user list
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = format!("{}/api/users", self.base_url);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        parse_user_list(read_json(response).await?)
    }

    /// Send a natural-language users command
    pub async fn run_users_nl(&self, request: &NlRequest) -> Result<Value> {
        let url = format!("{}/api/users/nl", self.base_url);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(request).send().await?;
        read_json(response).await
    }
}

/// Client for the generic tool runner (`/tools/<name>/run`)
#[derive(Debug, Clone)]
pub struct ToolRunnerClient {
    client: Client,
    base_url: String,
}

impl ToolRunnerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Invoke a tool and return its raw reply
    pub async fn run_tool<B: Serialize + ?Sized>(&self, tool: &str, body: &B) -> Result<Value> {
        let url = format!("{}/tools/{}/run", self.base_url, tool);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        read_json(response).await
    }

    /// Read all users through the `user-manager` tool
    pub async fn read_users(&self) -> Result<Vec<User>> {
        let reply = self.run_tool("user-manager", &ToolRunRequest::read()).await?;
        parse_tool_users(&reply)
    }
}

async fn read_json(response: Response) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!("{} answered {}", response.url(), status);
        return Err(ApiError::Status(status));
    }
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::serve;
    use crate::backend::types::ServerName;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_run_agent_sends_request_body() {
        // Echo the body back so the test sees exactly what was sent.
        let router = Router::new().route("/api/nl", post(|Json(body): Json<Value>| async move { Json(body) }));
        let client = BackendClient::new(&serve(router).await);

        let echoed = client
            .run_agent(&AgentRequest::new("Hey", ServerName::Github))
            .await
            .unwrap();
        assert_eq!(
            echoed,
            json!({ "query": "Hey", "max_steps": 30, "server_name": "github" })
        );
    }

    #[tokio::test]
    async fn test_list_users() {
        let router = Router::new().route(
            "/api/users",
            get(|| async { Json(json!([{ "id": 2, "name": "Nissan", "email": "Nissan@example.com" }])) }),
        );
        let client = BackendClient::new(&serve(router).await);

        let users = client.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Nissan");
    }

    #[tokio::test]
    async fn test_users_nl_error_status() {
        let router = Router::new().route(
            "/api/users/nl",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "detail": "Missing 'query'" }))) }),
        );
        let client = BackendClient::new(&serve(router).await);

        let err = client
            .run_users_nl(&NlRequest { query: String::new() })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status(status) if status.as_u16() == 400));
    }

    #[tokio::test]
    async fn test_read_users_through_tool() {
        let router = Router::new().route(
            "/api/tools/user-manager/run",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({ "action": "read" }));
                Json(json!({
                    "content": [{ "type": "text", "text": "[{\"id\":1,\"name\":\"Alice\",\"email\":\"alice@test.com\",\"address\":\"1 Main St\"}]" }]
                }))
            }),
        );
        let base = format!("{}/api", serve(router).await);
        let client = ToolRunnerClient::new(&base);

        let users = client.read_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].address.as_deref(), Some("1 Main St"));
    }

    #[tokio::test]
    async fn test_read_users_error_status() {
        let router = Router::new().route(
            "/api/tools/user-manager/run",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = format!("{}/api", serve(router).await);
        let client = ToolRunnerClient::new(&base);

        let err = client.read_users().await.unwrap_err();
        assert_eq!(err.to_string(), "request failed with status 500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Nothing listens on port 9 (discard) locally.
        let client = BackendClient::new("http://127.0.0.1:9");
        let err = client.list_users().await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }
}
