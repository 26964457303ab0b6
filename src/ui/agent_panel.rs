//! Agent panel: pick an MCP server, send a prompt to `/api/nl`

use iced::widget::{button, column, container, horizontal_rule, pick_list, row, text};
use iced::{Alignment, Element, Length};
use serde_json::Value;

use super::json_view::{self, JsonView};
use super::query_input;
use super::theme::{self, DarkTheme};
use crate::backend::types::{agent_display, AgentRequest, ServerName};
use crate::effect::Effect;
use crate::error::display_error;

const DEFAULT_QUERY: &str = "Hey, how are you?";
const RUNNING: &str = "Running...";

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    ServerSelected(ServerName),
    Run,
    Completed(Result<Value, String>),
    Viewer(json_view::Message),
}

pub struct AgentPanel {
    query: String,
    server: ServerName,
    result: JsonView,
}

impl Default for AgentPanel {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            server: ServerName::default(),
            result: JsonView::new(String::new()).with_max_height(240.0),
        }
    }
}

impl AgentPanel {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn server(&self) -> ServerName {
        self.server
    }

    /// Text currently shown in the result area
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn result(&self) -> &str {
        self.result.text()
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Effect::None
            }
            Message::ServerSelected(server) => {
                self.server = server;
                Effect::None
            }
            Message::Run => {
                self.result.set(RUNNING);
                tracing::info!(server = %self.server, "running agent query");
                Effect::RunAgent(AgentRequest::new(self.query.clone(), self.server))
            }
            Message::Completed(Ok(response)) => {
                self.result.set(agent_display(&response));
                Effect::None
            }
            Message::Completed(Err(err)) => {
                tracing::warn!("agent query failed: {}", err);
                self.result.set(display_error(&err));
                Effect::None
            }
            Message::Viewer(message) => self.result.update(message),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let server_picker = row![
            text("Server (MCP-use):").size(14).color(DarkTheme::TEXT_MUTED),
            pick_list(ServerName::ALL, Some(self.server), Message::ServerSelected)
                .placeholder("Choose server")
                .width(Length::Fixed(220.0)),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        container(
            column![
                text("Agent (MCP) - /api/nl").size(20).color(DarkTheme::TEXT),
                server_picker,
                query_input::view(
                    "Type your agent prompt...",
                    &self.query,
                    Message::QueryChanged,
                    Message::Run,
                ),
                button(text("Run Agent")).on_press(Message::Run),
                horizontal_rule(1),
                self.result.view().map(Message::Viewer),
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Length::Fill)
        .style(theme::card)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let panel = AgentPanel::new();
        assert_eq!(panel.query(), "Hey, how are you?");
        assert_eq!(panel.server(), ServerName::Playwright);
        assert_eq!(panel.result(), "");
    }

    #[test]
    fn test_run_sends_query_and_server() {
        let mut panel = AgentPanel::new();
        panel.update(Message::QueryChanged("book a flat in Lisbon".to_string()));
        panel.update(Message::ServerSelected(ServerName::Airbnb));

        let effect = panel.update(Message::Run);
        assert_eq!(
            effect,
            Effect::RunAgent(AgentRequest {
                query: "book a flat in Lisbon".to_string(),
                max_steps: 30,
                server_name: ServerName::Airbnb,
            })
        );
        assert_eq!(panel.result(), "Running...");
    }

    #[test]
    fn test_result_field_shown_verbatim() {
        let mut panel = AgentPanel::new();
        panel.update(Message::Completed(Ok(json!({ "result": "hi" }))));
        assert_eq!(panel.result(), "hi");
    }

    #[test]
    fn test_missing_result_shows_whole_body() {
        let mut panel = AgentPanel::new();
        panel.update(Message::Completed(Ok(json!({ "foo": 1 }))));
        assert_eq!(panel.result(), "{\n  \"foo\": 1\n}");
    }

    #[test]
    fn test_failure_shows_error() {
        let mut panel = AgentPanel::new();
        panel.update(Message::Run);
        panel.update(Message::Completed(Err("connection refused".to_string())));
        assert_eq!(panel.result(), "Error: connection refused");
    }

    #[test]
    fn test_last_response_wins() {
        let mut panel = AgentPanel::new();
        panel.update(Message::Run);
        panel.update(Message::Run);
        panel.update(Message::Completed(Ok(json!({ "result": "second" }))));
        panel.update(Message::Completed(Ok(json!({ "result": "first" }))));
        assert_eq!(panel.result(), "first");
    }

    #[test]
    fn test_copy_result() {
        let mut panel = AgentPanel::new();
        panel.update(Message::Completed(Ok(json!({ "result": "hi" }))));
        let effect = panel.update(Message::Viewer(json_view::Message::Copy));
        assert_eq!(
            effect,
            Effect::Copy {
                text: "hi".to_string(),
                ticket: 1
            }
        );
    }
}
