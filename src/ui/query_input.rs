//! Free-text query box shared by the panels

use iced::widget::{container, text_input};
use iced::{Background, Border, Color, Element, Length, Padding};

use super::theme::DarkTheme;

/// Query input component
pub fn view<'a, Message: Clone + 'a>(
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    container(
        text_input(placeholder, value)
            .on_input(on_input)
            .on_submit(on_submit)
            .padding(Padding::new(12.0))
            .size(16)
            .style(|_theme, _status| text_input::Style {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                icon: DarkTheme::TEXT_MUTED,
                placeholder: DarkTheme::TEXT_PLACEHOLDER,
                value: DarkTheme::TEXT,
                selection: DarkTheme::SELECTION,
            }),
    )
    .padding(Padding::from([4.0, 8.0]))
    .width(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(Background::Color(DarkTheme::BACKGROUND)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    })
    .into()
}
