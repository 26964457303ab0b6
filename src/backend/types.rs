//! Wire types shared by the agent server and the tool runner

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Step budget sent with every agent run
pub const MAX_STEPS: u32 = 30;

/// User record as returned by either backend.
///
/// Records are stored without validation, so users created through the NL
/// path may lack an `id`. Every field tolerates being absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// MCP servers the agent backend knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerName {
    #[default]
    Playwright,
    Airbnb,
    Github,
}

impl User {
    /// `id` as table text, blank when the record has none
    pub fn id_label(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }
}

impl ServerName {
    pub const ALL: [ServerName; 3] = [ServerName::Playwright, ServerName::Airbnb, ServerName::Github];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServerName::Playwright => "playwright",
            ServerName::Airbnb => "airbnb",
            ServerName::Github => "github",
        }
    }
}

impl fmt::Display for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentRequest {
    pub query: String,
    pub max_steps: u32,
    pub server_name: ServerName,
}

impl AgentRequest {
    pub fn new(query: impl Into<String>, server_name: ServerName) -> Self {
        Self {
            query: query.into(),
            max_steps: MAX_STEPS,
            server_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NlRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolRunRequest {
    pub action: String,
}

impl ToolRunRequest {
    pub fn read() -> Self {
        Self {
            action: "read".to_string(),
        }
    }
}

/// The `action` a users NL response reports having taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Create,
    Update,
    Delete,
    Other(String),
}

impl UserAction {
    /// Read the `action` field of a response, if it carries a string one.
    pub fn from_response(response: &Value) -> Option<Self> {
        let action = response.get("action")?.as_str()?;
        Some(match action {
            "create" => UserAction::Create,
            "update" => UserAction::Update,
            "delete" => UserAction::Delete,
            other => UserAction::Other(other.to_string()),
        })
    }

    /// Whether the stored users may have changed
    pub fn is_mutation(&self) -> bool {
        !matches!(self, UserAction::Other(_))
    }
}

/// Text the agent panel shows for a successful `/api/nl` response.
///
/// A string `result` is shown as-is. A missing or null `result` shows the
/// whole body pretty-printed; any other `result` shows its JSON text.
pub fn agent_display(response: &Value) -> String {
    match response.get("result") {
        Some(Value::String(result)) => result.clone(),
        Some(Value::Null) | None => pretty(response),
        Some(other) => other.to_string(),
    }
}

/// Two-space indented JSON, matching what the viewer shows.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Decode the body of `GET /api/users`.
///
/// Accepts a bare array, `{ "users": [...] }`, or `null`.
pub fn parse_user_list(body: Value) -> Result<Vec<User>> {
    match body {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => Ok(serde_json::from_value(body)?),
        Value::Object(mut map) => match map.remove("users") {
            Some(Value::Null) => Ok(Vec::new()),
            Some(users) => Ok(serde_json::from_value(users)?),
            None => Err(ApiError::Unexpected("object without a \"users\" field".to_string())),
        },
        other => Err(ApiError::Unexpected(format!("expected a user list, got {}", other))),
    }
}

/// Decode users out of a tool runner reply.
///
/// The tool puts a JSON-encoded array in `content[0].text`. Anything missing
/// along that path counts as an empty array, and a decoded value that is not
/// an array yields no users. Text that is not JSON at all is an error.
pub fn parse_tool_users(body: &Value) -> Result<Vec<User>> {
    let text = body
        .get("content")
        .and_then(|content| content.get(0))
        .and_then(|first| first.get("text"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or("[]");

    match serde_json::from_str::<Value>(text)? {
        users @ Value::Array(_) => Ok(serde_json::from_value(users)?),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn alice() -> User {
        User {
            id: Some(1),
            name: "Alice".to_string(),
            email: "alice@test.com".to_string(),
            address: None,
            phone: None,
        }
    }

    fn nissan() -> User {
        User {
            id: None,
            name: "Nissan".to_string(),
            email: "Nissan@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_agent_request_body() {
        let request = AgentRequest::new("hello", ServerName::Airbnb);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "query": "hello", "max_steps": 30, "server_name": "airbnb" })
        );
    }

    #[test]
    fn test_server_names_forwarded_verbatim() {
        let names: Vec<String> = ServerName::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["playwright", "airbnb", "github"]);
        assert_eq!(ServerName::default(), ServerName::Playwright);
    }

    #[test]
    fn test_tool_read_body() {
        assert_eq!(
            serde_json::to_value(ToolRunRequest::read()).unwrap(),
            json!({ "action": "read" })
        );
    }

    #[test]
    fn test_agent_display_uses_result() {
        assert_eq!(agent_display(&json!({ "result": "hi" })), "hi");
    }

    #[test]
    fn test_agent_display_without_result() {
        let body = json!({ "foo": 1 });
        assert_eq!(agent_display(&body), "{\n  \"foo\": 1\n}");
    }

    #[test]
    fn test_agent_display_null_result() {
        let body = json!({ "result": null, "error": "x" });
        assert_eq!(agent_display(&body), pretty(&body));
    }

    #[test]
    fn test_agent_display_non_string_result() {
        assert_eq!(agent_display(&json!({ "result": 42 })), "42");
    }

    #[test]
    fn test_user_action_mutations() {
        for action in ["create", "update", "delete"] {
            let parsed = UserAction::from_response(&json!({ "action": action })).unwrap();
            assert!(parsed.is_mutation(), "{} should be a mutation", action);
        }
        let list = UserAction::from_response(&json!({ "action": "list" })).unwrap();
        assert_eq!(list, UserAction::Other("list".to_string()));
        assert!(!list.is_mutation());
    }

    #[test]
    fn test_user_action_missing() {
        assert_eq!(UserAction::from_response(&json!({ "mode": "chat" })), None);
        assert_eq!(UserAction::from_response(&json!({ "action": 3 })), None);
        assert_eq!(UserAction::from_response(&json!([1, 2])), None);
    }

    #[test]
    fn test_user_optional_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "name": "Bob",
            "email": "bob@x.com",
            "phone": "555"
        }))
        .unwrap();
        assert_eq!(user.address, None);
        assert_eq!(user.phone.as_deref(), Some("555"));
    }

    #[test]
    fn test_parse_user_list_shapes() {
        let array = json!([{ "id": 1, "name": "Alice", "email": "alice@test.com" }]);
        assert_eq!(parse_user_list(array).unwrap(), vec![alice()]);

        let wrapped = json!({ "users": [{ "id": 1, "name": "Alice", "email": "alice@test.com" }] });
        assert_eq!(parse_user_list(wrapped).unwrap(), vec![alice()]);

        assert!(parse_user_list(Value::Null).unwrap().is_empty());
        assert!(parse_user_list(json!({ "users": [] })).unwrap().is_empty());
    }

    #[test]
    fn test_parse_user_list_mixed_records() {
        let body = json!([
            { "id": 1, "name": "Alice", "email": "alice@test.com" },
            { "name": "Nissan", "email": "Nissan@example.com" }
        ]);
        assert_eq!(parse_user_list(body).unwrap(), vec![alice(), nissan()]);
    }

    #[test]
    fn test_user_without_id_has_blank_label() {
        assert_eq!(nissan().id_label(), "");
        assert_eq!(alice().id_label(), "1");
    }

    #[test]
    fn test_parse_user_list_rejects_other_shapes() {
        assert!(matches!(
            parse_user_list(json!({ "detail": "nope" })),
            Err(ApiError::Unexpected(_))
        ));
        assert!(matches!(parse_user_list(json!("text")), Err(ApiError::Unexpected(_))));
    }

    #[test]
    fn test_tool_users_empty_array() {
        let body = json!({ "content": [{ "text": "[]" }] });
        assert!(parse_tool_users(&body).unwrap().is_empty());
    }

    #[test]
    fn test_tool_users_decodes_inner_text() {
        let body = json!({
            "content": [{ "type": "text", "text": "[{\"id\":1,\"name\":\"Alice\",\"email\":\"alice@test.com\"}]" }]
        });
        assert_eq!(parse_tool_users(&body).unwrap(), vec![alice()]);
    }

    #[test]
    fn test_tool_users_without_ids() {
        let body = json!({
            "content": [{ "text": "[{\"name\":\"Nissan\",\"email\":\"Nissan@example.com\"}]" }]
        });
        assert_eq!(parse_tool_users(&body).unwrap(), vec![nissan()]);
    }

    #[test]
    fn test_tool_users_missing_fields_fall_back() {
        assert!(parse_tool_users(&json!({})).unwrap().is_empty());
        assert!(parse_tool_users(&json!({ "content": [] })).unwrap().is_empty());
        assert!(parse_tool_users(&json!({ "content": [{}] })).unwrap().is_empty());
        assert!(parse_tool_users(&json!({ "content": [{ "text": "" }] })).unwrap().is_empty());
    }

    #[test]
    fn test_tool_users_non_array_is_empty() {
        let body = json!({ "content": [{ "text": "{\"id\": 1}" }] });
        assert!(parse_tool_users(&body).unwrap().is_empty());
    }

    #[test]
    fn test_tool_users_malformed_text() {
        let body = json!({ "content": [{ "text": "[{not json" }] });
        assert!(matches!(parse_tool_users(&body), Err(ApiError::Json(_))));
    }
}
