//! Users panel driven by natural-language commands (`/api/users/nl`)
//!
//! Shows the raw JSON reply next to the current user list. The list is
//! re-fetched after a reply whose `action` is a mutation, or on demand.

use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Padding};
use serde_json::Value;

use super::json_view::{self, JsonView};
use super::query_input;
use super::theme::{self, DarkTheme};
use crate::backend::types::{NlRequest, User, UserAction};
use crate::effect::Effect;
use crate::error::display_error;

const DEFAULT_QUERY: &str = "I want to create a new user named Nissan, email Nissan@example.com";
const PROCESSING: &str = "Processing...";
const LIST_HEIGHT: f32 = 192.0;

const EXAMPLES: [(&str, &str); 5] = [
    ("create a user named Alice, email alice@test.com", "Adds a new user with specified details."),
    ("update user 1: name Bob", "Modifies the name of user ID 1."),
    ("update user 2: email new@x.com", "Changes the email of user ID 2."),
    ("delete user 3", "Removes user ID 3 permanently."),
    ("list all users / show users", "Displays the full list of current users."),
];

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Run,
    Refresh,
    Completed(Result<Value, String>),
    UsersLoaded(Result<Vec<User>, String>),
    Viewer(json_view::Message),
}

pub struct UsersNlPanel {
    query: String,
    response: JsonView,
    users: Vec<User>,
    busy: bool,
}

impl Default for UsersNlPanel {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            response: JsonView::new(String::new()).with_max_height(LIST_HEIGHT),
            users: Vec::new(),
            busy: false,
        }
    }
}

impl UsersNlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial user list fetch
    pub fn mount(&mut self) -> Effect {
        self.load_users()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn response(&self) -> &str {
        self.response.text()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Effect::None
            }
            Message::Run => {
                self.response.set(PROCESSING);
                Effect::RunUsersNl(NlRequest {
                    query: self.query.clone(),
                })
            }
            Message::Refresh => self.load_users(),
            Message::Completed(Ok(reply)) => {
                let action = UserAction::from_response(&reply);
                self.response.set(reply);
                match action {
                    Some(action) if action.is_mutation() => {
                        tracing::info!(?action, "users changed, refreshing list");
                        self.load_users()
                    }
                    _ => Effect::None,
                }
            }
            Message::Completed(Err(err)) => {
                tracing::warn!("users command failed: {}", err);
                self.response.set(display_error(&err));
                Effect::None
            }
            Message::UsersLoaded(result) => {
                self.busy = false;
                match result {
                    Ok(users) => {
                        tracing::info!("loaded {} users", users.len());
                        self.users = users;
                    }
                    Err(err) => tracing::warn!("failed to load users: {}", err),
                }
                Effect::None
            }
            Message::Viewer(message) => self.response.update(message),
        }
    }

    fn load_users(&mut self) -> Effect {
        self.busy = true;
        Effect::LoadUsers
    }

    pub fn view(&self) -> Element<'_, Message> {
        let buttons = row![
            button(text("Run Users NL")).on_press(Message::Run),
            button(text("Refresh Users"))
                .style(button::secondary)
                .on_press(Message::Refresh),
        ]
        .spacing(8);

        let response: Element<'_, Message> = if self.response.is_empty() {
            json_view::placeholder("Result will appear here...")
        } else {
            self.response.view().map(Message::Viewer)
        };

        let results = row![
            container(column![text("API Response").size(14), response].spacing(6))
                .padding(12)
                .width(Length::FillPortion(1))
                .style(theme::well),
            container(self.view_users())
                .padding(12)
                .width(Length::FillPortion(1))
                .style(theme::well),
        ]
        .spacing(12);

        container(
            column![
                text("Users (Natural Language) - /api/users/nl")
                    .size(20)
                    .color(DarkTheme::TEXT),
                query_input::view(
                    "Enter your command in natural language...",
                    &self.query,
                    Message::QueryChanged,
                    Message::Run,
                ),
                view_tips(),
                buttons,
                horizontal_rule(1),
                results,
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Length::Fill)
        .style(theme::card)
        .into()
    }

    fn view_users(&self) -> Element<'_, Message> {
        let mut heading = row![text("Users in Database").size(14), Space::with_width(Length::Fill)]
            .align_y(Alignment::Center);
        if self.busy {
            heading = heading.push(text("loading…").size(12).color(DarkTheme::TEXT_MUTED));
        }

        let entries: Element<'_, Message> = if self.users.is_empty() {
            container(text("(no users)").size(13).color(DarkTheme::TEXT_PLACEHOLDER))
                .center_x(Length::Fill)
                .padding(Padding::from([8.0, 0.0]))
                .into()
        } else {
            column(self.users.iter().map(|user| {
                row![
                    text(user_label(user)).size(13),
                    Space::with_width(Length::Fill),
                    text(format!("<{}>", user.email))
                        .size(13)
                        .color(DarkTheme::TEXT_MUTED),
                ]
                .into()
            }))
            .spacing(4)
            .into()
        };

        column![
            heading,
            scrollable(entries).height(Length::Fixed(LIST_HEIGHT)),
        ]
        .spacing(6)
        .into()
    }
}

/// `#id name` for the side list, or just the name when there is no id
fn user_label(user: &User) -> String {
    match user.id {
        Some(id) => format!("#{} {}", id, user.name),
        None => user.name.clone(),
    }
}

fn view_tips<'a>() -> Element<'a, Message> {
    let examples = column(EXAMPLES.iter().map(|(command, effect)| {
        column![
            text(*command).size(12).font(iced::Font::MONOSPACE),
            text(format!("→ {}", effect)).size(11).color(DarkTheme::TEXT_MUTED),
        ]
        .into()
    }))
    .spacing(4)
    .padding(Padding::from([0.0, 8.0]));

    column![
        text(
            "Tips: this panel accepts natural-language commands for managing users. \
             Use clear, simple actions to trigger CRUD operations."
        )
        .size(12)
        .color(DarkTheme::TEXT_MUTED),
        examples,
        text(
            "Stick to keywords like create, update, delete, list, show, and be \
             specific with names, IDs and values."
        )
        .size(12)
        .color(DarkTheme::TEXT_MUTED),
        container(
            text(
                "Commands that cannot be handled locally are forwarded to the \
                 MCP-use server. Asking \"Hello!\" returns a chat reply from the \
                 remote AI service."
            )
            .size(12)
            .color(DarkTheme::PRIMARY),
        )
        .padding(8)
        .width(Length::Fill)
        .style(theme::note),
    ]
    .spacing(6)
    .into()
}
