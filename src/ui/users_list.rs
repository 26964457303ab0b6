//! Users table fed by the tool runner (`user-manager` tool, `read` action)

use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length, Padding};

use super::theme::{self, DarkTheme};
use crate::backend::types::User;
use crate::effect::Effect;
use crate::error::display_error;

const SKELETON_ROWS: usize = 5;

/// Column headers with their relative widths
const COLUMNS: [(&str, u16); 5] = [("ID", 1), ("Name", 3), ("Email", 4), ("Address", 4), ("Phone", 3)];

/// Skeleton bar widths per column, in logical pixels
const SKELETON_WIDTHS: [f32; 5] = [32.0, 96.0, 128.0, 144.0, 80.0];

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Loading,
    Failed(String),
    Loaded(Vec<User>),
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<User>, String>),
    EmailClicked(String),
}

pub struct UsersList {
    state: State,
}

impl Default for UsersList {
    fn default() -> Self {
        Self {
            state: State::Loading,
        }
    }
}

impl UsersList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The one fetch this panel ever makes
    pub fn mount(&mut self) -> Effect {
        self.state = State::Loading;
        Effect::ReadToolUsers
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Loaded(Ok(users)) => {
                tracing::info!("tool runner returned {} users", users.len());
                self.state = State::Loaded(users);
                Effect::None
            }
            Message::Loaded(Err(err)) => {
                tracing::warn!("failed to read users from tool runner: {}", err);
                self.state = State::Failed(err);
                Effect::None
            }
            Message::EmailClicked(email) => Effect::OpenMailto(email),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.state {
            State::Loading => column![
                text("Loading Users...").size(18).color(DarkTheme::TEXT),
                header_row(),
                column((0..SKELETON_ROWS).map(|_| skeleton_row())).spacing(8),
            ]
            .spacing(12)
            .into(),
            State::Failed(err) => text(display_error(err))
                .size(14)
                .color(DarkTheme::ERROR)
                .into(),
            State::Loaded(users) if users.is_empty() => column![
                text("Users List").size(18).color(DarkTheme::TEXT),
                text("No users found.").size(14).color(DarkTheme::TEXT_MUTED),
            ]
            .spacing(12)
            .into(),
            State::Loaded(users) => column![
                text("Users List").size(18).color(DarkTheme::TEXT),
                header_row(),
                column(users.iter().map(user_row)).spacing(4),
            ]
            .spacing(12)
            .into(),
        };

        container(content)
            .padding(20)
            .width(Length::Fill)
            .style(theme::card)
            .into()
    }
}

fn header_row<'a>() -> Element<'a, Message> {
    row(COLUMNS.iter().map(|(title, portion)| {
        text(*title)
            .size(13)
            .color(DarkTheme::TEXT_MUTED)
            .width(Length::FillPortion(*portion))
            .into()
    }))
    .padding(Padding::from([4.0, 8.0]))
    .into()
}

fn skeleton_row<'a>() -> Element<'a, Message> {
    row(COLUMNS.iter().zip(SKELETON_WIDTHS).map(|((_, portion), width)| {
        container(
            container(Space::new(Length::Fixed(width), Length::Fixed(16.0))).style(theme::skeleton),
        )
        .width(Length::FillPortion(*portion))
        .into()
    }))
    .padding(Padding::from([4.0, 8.0]))
    .into()
}

fn cell<'a>(value: String, portion: u16) -> Element<'a, Message> {
    text(value).size(14).width(Length::FillPortion(portion)).into()
}

fn user_row(user: &User) -> Element<'_, Message> {
    row![
        cell(user.id_label(), COLUMNS[0].1),
        cell(user.name.clone(), COLUMNS[1].1),
        container(
            button(text(&user.email).size(14))
                .padding(0)
                .style(theme::link)
                .on_press(Message::EmailClicked(user.email.clone())),
        )
        .width(Length::FillPortion(COLUMNS[2].1)),
        text(user.address.as_deref().unwrap_or_default())
            .size(14)
            .color(DarkTheme::TEXT_MUTED)
            .width(Length::FillPortion(COLUMNS[3].1)),
        cell(user.phone.clone().unwrap_or_default(), COLUMNS[4].1),
    ]
    .padding(Padding::from([6.0, 8.0]))
    .into()
}
