//! Syntax highlighting for the JSON viewer

use iced::Color;
use once_cell::sync::Lazy;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style as SyntectStyle, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEMES: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

const THEME_NAME: &str = "base16-ocean.dark";

/// Grammar used to color the viewer contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Json,
    #[cfg_attr(not(test), allow(dead_code))]
    JavaScript,
}

impl Language {
    fn extension(&self) -> &'static str {
        match self {
            Language::Json => "json",
            Language::JavaScript => "js",
        }
    }
}

/// A run of text drawn in one color
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub color: Color,
}

/// Highlight `source` into lines of colored tokens.
///
/// Newlines are dropped; joining each line's tokens and then the lines with
/// `\n` gives back `source` (minus one trailing newline, if any).
pub fn highlight(source: &str, language: Language) -> Vec<Vec<Token>> {
    let syntax = SYNTAX_SET
        .find_syntax_by_extension(language.extension())
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let mut highlighter = HighlightLines::new(syntax, theme());

    LinesWithEndings::from(source)
        .map(|line| match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => ranges
                .into_iter()
                .filter_map(|(style, text)| token(style, text))
                .collect(),
            Err(err) => {
                tracing::debug!("highlighting failed, using plain text: {}", err);
                plain(line)
            }
        })
        .collect()
}

fn theme() -> &'static Theme {
    THEMES
        .themes
        .get(THEME_NAME)
        .or_else(|| THEMES.themes.values().next())
        .expect("syntect ships default themes")
}

fn token(style: SyntectStyle, text: &str) -> Option<Token> {
    let text = text.trim_end_matches(['\n', '\r']);
    if text.is_empty() {
        return None;
    }
    Some(Token {
        text: text.to_string(),
        color: Color::from_rgb8(style.foreground.r, style.foreground.g, style.foreground.b),
    })
}

fn plain(line: &str) -> Vec<Token> {
    let text = line.trim_end_matches(['\n', '\r']);
    if text.is_empty() {
        return Vec::new();
    }
    vec![Token {
        text: text.to_string(),
        color: Color::WHITE,
    }]
}
