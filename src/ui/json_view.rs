//! Read-only JSON viewer with syntax highlighting and a copy button
//!
//! The copy indicator is a small timed state machine. Every click bumps a
//! ticket and shows "Copied!"; the reset scheduled for that click only takes
//! effect if no newer click happened in between.

use std::time::Duration;

use iced::widget::text::{LineHeight, Wrapping};
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Element, Font, Length, Padding, Pixels};
use serde_json::Value;

use super::highlight::{highlight, Language, Token};
use super::theme::{self, DarkTheme};
use crate::backend::types::pretty;
use crate::effect::Effect;

/// How long "Copied!" stays up after a click
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

pub const DEFAULT_MAX_HEIGHT: f32 = 400.0;

const LINE_HEIGHT: LineHeight = LineHeight::Absolute(Pixels(22.0));

const COPY_LABEL: &str = "Copy";
const COPIED_LABEL: &str = "Copied!";

/// What the viewer is asked to show
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Shown verbatim
    Text(String),
    /// Serialized with two-space indentation
    Value(Value),
}

impl Payload {
    pub fn render(&self) -> String {
        match self {
            Payload::Text(text) => text.clone(),
            Payload::Value(value) => pretty(value),
        }
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Value(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
}

#[derive(Debug, Clone)]
pub enum Message {
    Copy,
    /// Timer for the given ticket elapsed
    Reset(u64),
}

#[derive(Debug, Clone)]
pub struct JsonView {
    text: String,
    lines: Vec<Vec<Token>>,
    language: Language,
    max_height: f32,
    show_copy_button: bool,
    copy_state: CopyState,
    ticket: u64,
}

impl Default for JsonView {
    fn default() -> Self {
        Self {
            text: String::new(),
            lines: Vec::new(),
            language: Language::Json,
            max_height: DEFAULT_MAX_HEIGHT,
            show_copy_button: true,
            copy_state: CopyState::Idle,
            ticket: 0,
        }
    }
}

impl JsonView {
    pub fn new(data: impl Into<Payload>) -> Self {
        let mut view = Self::default();
        view.set(data);
        view
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self.lines = highlight(&self.text, language);
        self
    }

    pub fn with_max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_copy_button(mut self, show: bool) -> Self {
        self.show_copy_button = show;
        self
    }

    /// Replace the contents
    pub fn set(&mut self, data: impl Into<Payload>) {
        self.text = data.into().render();
        self.lines = highlight(&self.text, self.language);
    }

    /// The exact text shown (and copied)
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn copy_state(&self) -> CopyState {
        self.copy_state
    }

    pub fn copy_label(&self) -> &'static str {
        match self.copy_state {
            CopyState::Idle => COPY_LABEL,
            CopyState::Copied => COPIED_LABEL,
        }
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Copy => {
                if !self.show_copy_button {
                    return Effect::None;
                }
                self.ticket += 1;
                self.copy_state = CopyState::Copied;
                Effect::Copy {
                    text: self.text.clone(),
                    ticket: self.ticket,
                }
            }
            Message::Reset(ticket) => {
                if ticket == self.ticket {
                    self.copy_state = CopyState::Idle;
                }
                Effect::None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut header = row![text("JSON Output").size(12), Space::with_width(Length::Fill)]
            .align_y(iced::Alignment::Center);

        if self.show_copy_button {
            header = header.push(
                button(text(self.copy_label()).size(12))
                    .padding(Padding::from([4.0, 8.0]))
                    .style(theme::copy_button(self.copy_state == CopyState::Copied))
                    .on_press(Message::Copy),
            );
        }

        // Rows shrink to fit, so a long line wraps onto as many lines as it needs
        let body = column(self.lines.iter().map(|tokens| {
            row(tokens.iter().map(|token| {
                text(&token.text)
                    .font(Font::MONOSPACE)
                    .size(14)
                    .line_height(LINE_HEIGHT)
                    .wrapping(Wrapping::WordOrGlyph)
                    .color(token.color)
                    .into()
            }))
            .wrap()
            .into()
        }))
        .padding(16);

        container(column![
            container(header)
                .padding(Padding::from([8.0, 12.0]))
                .width(Length::Fill)
                .style(theme::code_header),
            container(scrollable(body).width(Length::Fill)).max_height(self.max_height),
        ])
        .width(Length::Fill)
        .style(theme::code_block)
        .into()
    }
}

/// Muted line shown where a viewer has nothing to show yet
pub fn placeholder<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    container(text(label).size(13).color(DarkTheme::TEXT_MUTED))
        .padding(12)
        .width(Length::Fill)
        .into()
}
