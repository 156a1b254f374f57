//! Rendering subsystem: the screen model and its ratatui front end.

pub mod ui;

pub use ui::{ScreenState, TerminalUI, UIRenderer};
