//! Root shell: lays out the panels and runs their effects
//!
//! Panels never see each other. Each returns an `Effect`, and `perform`
//! turns it into exactly one async task whose result is routed back to the
//! panel that asked for it.

use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length, Task, Theme};

use crate::backend::{BackendClient, ToolRunnerClient};
use crate::config::Config;
use crate::effect::Effect;
use crate::ui::agent_panel::{self, AgentPanel};
use crate::ui::json_view::{self, COPY_FEEDBACK};
use crate::ui::theme::DarkTheme;
use crate::ui::users_list::{self, UsersList};
use crate::ui::users_nl_panel::{self, UsersNlPanel};

const HEADING: &str = "MCP UI - Natural Language (NL)";

#[derive(Debug, Clone)]
pub enum Message {
    Agent(agent_panel::Message),
    UsersNl(users_nl_panel::Message),
    UsersList(users_list::Message),
}

/// Which panel an effect came from, so its follow-up lands back there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Agent,
    UsersNl,
    UsersList,
}

impl Origin {
    fn viewer(self, message: json_view::Message) -> Option<Message> {
        match self {
            Origin::Agent => Some(Message::Agent(agent_panel::Message::Viewer(message))),
            Origin::UsersNl => Some(Message::UsersNl(users_nl_panel::Message::Viewer(message))),
            Origin::UsersList => None,
        }
    }
}

pub struct Console {
    backend: BackendClient,
    tools: ToolRunnerClient,
    agent: AgentPanel,
    users_nl: UsersNlPanel,
    users_list: Option<UsersList>,
}

impl Console {
    pub fn new(config: &Config) -> (Self, Task<Message>) {
        let mut console = Self {
            backend: BackendClient::new(&config.backend.agent_url),
            tools: ToolRunnerClient::new(&config.backend.tools_url),
            agent: AgentPanel::new(),
            users_nl: UsersNlPanel::new(),
            users_list: config.ui.show_tool_users.then(UsersList::new),
        };

        let mut startup = vec![];
        let effect = console.users_nl.mount();
        startup.push(console.perform(effect, Origin::UsersNl));
        if let Some(list) = console.users_list.as_mut() {
            let effect = list.mount();
            startup.push(console.perform(effect, Origin::UsersList));
        }

        (console, Task::batch(startup))
    }

    pub fn title(&self) -> String {
        String::from("MCP Console")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Agent(message) => {
                let effect = self.agent.update(message);
                self.perform(effect, Origin::Agent)
            }
            Message::UsersNl(message) => {
                let effect = self.users_nl.update(message);
                self.perform(effect, Origin::UsersNl)
            }
            Message::UsersList(message) => match self.users_list.as_mut() {
                Some(list) => {
                    let effect = list.update(message);
                    self.perform(effect, Origin::UsersList)
                }
                None => Task::none(),
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut panels = column![
            text(HEADING).size(26).color(DarkTheme::TEXT),
            self.agent.view().map(Message::Agent),
            self.users_nl.view().map(Message::UsersNl),
        ]
        .spacing(24)
        .padding(24);

        if let Some(list) = &self.users_list {
            panels = panels.push(list.view().map(Message::UsersList));
        }

        container(scrollable(panels))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(DarkTheme::BACKGROUND)),
                ..Default::default()
            })
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Turn a panel effect into a task
    fn perform(&self, effect: Effect, origin: Origin) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::RunAgent(request) => {
                let backend = self.backend.clone();
                Task::perform(
                    async move { backend.run_agent(&request).await.map_err(|e| e.to_string()) },
                    |result| Message::Agent(agent_panel::Message::Completed(result)),
                )
            }
            Effect::RunUsersNl(request) => {
                let backend = self.backend.clone();
                Task::perform(
                    async move { backend.run_users_nl(&request).await.map_err(|e| e.to_string()) },
                    |result| Message::UsersNl(users_nl_panel::Message::Completed(result)),
                )
            }
            Effect::LoadUsers => {
                let backend = self.backend.clone();
                Task::perform(
                    async move { backend.list_users().await.map_err(|e| e.to_string()) },
                    |result| Message::UsersNl(users_nl_panel::Message::UsersLoaded(result)),
                )
            }
            Effect::ReadToolUsers => {
                let tools = self.tools.clone();
                Task::perform(
                    async move { tools.read_users().await.map_err(|e| e.to_string()) },
                    |result| Message::UsersList(users_list::Message::Loaded(result)),
                )
            }
            Effect::Copy { text, ticket } => {
                let Some(reset) = origin.viewer(json_view::Message::Reset(ticket)) else {
                    return Task::none();
                };
                Task::batch([
                    iced::clipboard::write(text),
                    Task::perform(copy_reset(reset), |message| message),
                ])
            }
            Effect::OpenMailto(email) => {
                if let Err(e) = open::that_detached(format!("mailto:{}", email)) {
                    tracing::warn!("could not open mail client for {}: {}", email, e);
                }
                Task::none()
            }
        }
    }
}

/// Hand back the viewer reset once the "Copied!" feedback has been shown long enough
async fn copy_reset(reset: Message) -> Message {
    tokio::time::sleep(COPY_FEEDBACK).await;
    reset
}
