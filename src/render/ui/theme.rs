//! Terminal styles derived from the two theme tokens.
//!
//! Muted text, borders and disabled controls are `dark` laid over `light` at partial opacity.
//! Terminals have no alpha, so those colors are blended up front.

use crate::theme::{ColorTokens, Rgb};
use ratatui::style::{Color, Modifier, Style};

/// Accent used for the focused field and the show-more control
const BLUE: Color = Color::Rgb(0, 150, 255);

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Base text on background
    pub normal_text: Style,

    /// Secondary text such as author names
    pub muted_text: Style,

    /// Highlighted preview row
    pub selection: Style,

    /// Borders of the list and overlays
    pub border: Style,

    /// Focused form field and enabled buttons
    pub accent: Style,

    /// Disabled buttons
    pub disabled: Style,

    /// Status line
    pub status: Style,

    /// "No results" message
    pub message: Style,
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Mix `fg` over `bg` with the given opacity.
fn blend(fg: Rgb, bg: Rgb, alpha: f32) -> Color {
    let mix = |f: u8, b: u8| (f as f32 * alpha + b as f32 * (1.0 - alpha)).round() as u8;
    Color::Rgb(mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}

impl ColorTheme {
    pub fn from_tokens(tokens: ColorTokens) -> Self {
        let dark = to_color(tokens.dark);
        let light = to_color(tokens.light);

        Self {
            normal_text: Style::default().fg(blend(tokens.dark, tokens.light, 0.8)).bg(light),
            muted_text: Style::default().fg(blend(tokens.dark, tokens.light, 0.4)).bg(light),
            selection: Style::default()
                .fg(light)
                .bg(dark)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(blend(tokens.dark, tokens.light, 0.15)).bg(light),
            accent: Style::default().fg(BLUE).bg(light).add_modifier(Modifier::BOLD),
            disabled: Style::default().fg(blend(tokens.dark, tokens.light, 0.2)).bg(light),
            status: Style::default().fg(light).bg(blend(tokens.dark, tokens.light, 0.8)),
            message: Style::default().fg(dark).bg(light).add_modifier(Modifier::BOLD),
        }
    }
}
