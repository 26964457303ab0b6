//! Theme configuration

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Dark theme colors
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const SURFACE: Color = Color::from_rgb(0.13, 0.13, 0.16);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
    pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.4, 0.45);
    pub const SELECTION: Color = Color::from_rgb(0.2, 0.25, 0.35);
    pub const ERROR: Color = Color::from_rgb(0.94, 0.33, 0.31);
    pub const SUCCESS: Color = Color::from_rgb(0.06, 0.73, 0.51);
    pub const NEUTRAL: Color = Color::from_rgb(0.42, 0.45, 0.5);
    pub const SKELETON: Color = Color::from_rgb(0.24, 0.24, 0.28);
    pub const CODE_BACKGROUND: Color = Color::from_rgb(0.118, 0.118, 0.118);
    pub const CODE_HEADER: Color = Color::from_rgb(0.176, 0.176, 0.176);
    pub const NOTE_BACKGROUND: Color = Color::from_rgb(0.11, 0.15, 0.24);
    pub const NOTE_BORDER: Color = Color::from_rgb(0.2, 0.3, 0.5);
}

/// Card surrounding each panel
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::SURFACE)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Bordered box holding a response or a list
pub fn well(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::BACKGROUND)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn note(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::NOTE_BACKGROUND)),
        border: Border {
            color: DarkTheme::NOTE_BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

pub fn code_block(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::CODE_BACKGROUND)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn code_header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::CODE_HEADER)),
        text_color: Some(Color::WHITE),
        border: Border::default().rounded(8),
        ..Default::default()
    }
}

pub fn skeleton(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::SKELETON)),
        border: Border::default().rounded(4),
        ..Default::default()
    }
}

/// Copy button: gray while idle, green while showing "Copied!"
pub fn copy_button(copied: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base = if copied { DarkTheme::SUCCESS } else { DarkTheme::NEUTRAL };
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color { a: 0.85, ..base },
            _ => base,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::WHITE,
            border: Border::default().rounded(4),
            ..Default::default()
        }
    }
}

/// Borderless text button used for mailto links
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => DarkTheme::TEXT,
        _ => DarkTheme::PRIMARY,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}
