//! Terminal rendering components.
//!
//! This module hosts the concrete terminal UI implementation along with the screen model it
//! draws and the styles derived from the theme tokens.

pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

pub use renderer::UIRenderer;
pub use state::{ScreenState, SearchField, SearchForm, Select, SettingsForm};
pub use terminal::TerminalUI;
pub use theme::ColorTheme;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
