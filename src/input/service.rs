//! Key bindings.
//!
//! Translates raw terminal events into domain-level `InputAction`s. The same key means
//! different things depending on which surface has focus: the book list, one of the two forms,
//! or the detail overlay.

use crate::input::raw::RawInputEvent;
use crate::overlay::OverlayKind;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by a single mouse wheel tick.
const WHEEL_ROWS: usize = 3;

/// Surface receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    SearchForm,
    SettingsForm,
    Detail,
}

impl From<Option<OverlayKind>> for Focus {
    fn from(overlay: Option<OverlayKind>) -> Self {
        match overlay {
            None => Focus::List,
            Some(OverlayKind::Search) => Focus::SearchForm,
            Some(OverlayKind::Settings) => Focus::SettingsForm,
            Some(OverlayKind::Detail) => Focus::Detail,
        }
    }
}

/// Direction for cursor moves in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Direction for cycling through select options and form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// High-level input actions emitted by the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    MoveCursor {
        direction: ScrollDirection,
        rows: usize,
    },
    CursorToStart,
    CursorToEnd,
    ShowMore,
    /// Open the detail view for the highlighted preview
    SelectHighlighted,
    OpenOverlay(OverlayKind),
    CloseOverlay(OverlayKind),
    FormInput(char),
    FormBackspace,
    FormField(Step),
    FormCycle(Step),
    SubmitSearch,
    SubmitSettings,
    Resize {
        width: u16,
        height: u16,
    },
    Quit,
    NoAction,
    InvalidInput,
}

/// Key binding state machine; its state is the focused surface.
#[derive(Debug, Default)]
pub struct InputStateMachine {
    focus: Focus,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Translate any raw event.
    pub fn handle_raw_event(&mut self, event: RawInputEvent) -> InputAction {
        match event {
            RawInputEvent::Key(key) => self.handle_key_event(key),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
            RawInputEvent::Wheel { down } if self.focus == Focus::List => InputAction::MoveCursor {
                direction: if down {
                    ScrollDirection::Down
                } else {
                    ScrollDirection::Up
                },
                rows: WHEEL_ROWS,
            },
            RawInputEvent::Wheel { .. } => InputAction::NoAction,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            return InputAction::Quit;
        }

        match self.focus {
            Focus::List => Self::list_key(key_event),
            Focus::SearchForm => Self::search_key(key_event),
            Focus::SettingsForm => Self::settings_key(key_event),
            Focus::Detail => Self::detail_key(key_event),
        }
    }

    fn list_key(key_event: KeyEvent) -> InputAction {
        let plain = !key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key_event.code {
            KeyCode::Char('j') if plain => InputAction::MoveCursor {
                direction: ScrollDirection::Down,
                rows: 1,
            },
            KeyCode::Down => InputAction::MoveCursor {
                direction: ScrollDirection::Down,
                rows: 1,
            },
            KeyCode::Char('k') if plain => InputAction::MoveCursor {
                direction: ScrollDirection::Up,
                rows: 1,
            },
            KeyCode::Up => InputAction::MoveCursor {
                direction: ScrollDirection::Up,
                rows: 1,
            },
            KeyCode::PageDown => InputAction::MoveCursor {
                direction: ScrollDirection::Down,
                rows: 10,
            },
            KeyCode::PageUp => InputAction::MoveCursor {
                direction: ScrollDirection::Up,
                rows: 10,
            },
            KeyCode::Char('g') if plain => InputAction::CursorToStart,
            KeyCode::Home => InputAction::CursorToStart,
            KeyCode::Char('G') if plain => InputAction::CursorToEnd,
            KeyCode::End => InputAction::CursorToEnd,
            KeyCode::Char('m') | KeyCode::Char(' ') if plain => InputAction::ShowMore,
            KeyCode::Enter => InputAction::SelectHighlighted,
            KeyCode::Char('/') | KeyCode::Char('s') if plain => {
                InputAction::OpenOverlay(OverlayKind::Search)
            }
            KeyCode::Char('t') if plain => InputAction::OpenOverlay(OverlayKind::Settings),
            KeyCode::Char('q') if plain => InputAction::Quit,
            _ => InputAction::InvalidInput,
        }
    }

    fn search_key(key_event: KeyEvent) -> InputAction {
        match key_event.code {
            KeyCode::Esc => InputAction::CloseOverlay(OverlayKind::Search),
            KeyCode::Enter => InputAction::SubmitSearch,
            KeyCode::Tab | KeyCode::Down => InputAction::FormField(Step::Forward),
            KeyCode::BackTab | KeyCode::Up => InputAction::FormField(Step::Backward),
            KeyCode::Right => InputAction::FormCycle(Step::Forward),
            KeyCode::Left => InputAction::FormCycle(Step::Backward),
            KeyCode::Backspace => InputAction::FormBackspace,
            KeyCode::Char(ch)
                if !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                InputAction::FormInput(ch)
            }
            _ => InputAction::InvalidInput,
        }
    }

    fn settings_key(key_event: KeyEvent) -> InputAction {
        match key_event.code {
            KeyCode::Esc => InputAction::CloseOverlay(OverlayKind::Settings),
            KeyCode::Enter => InputAction::SubmitSettings,
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Tab => {
                InputAction::FormCycle(Step::Forward)
            }
            KeyCode::Left | KeyCode::BackTab => InputAction::FormCycle(Step::Backward),
            _ => InputAction::InvalidInput,
        }
    }

    fn detail_key(key_event: KeyEvent) -> InputAction {
        match key_event.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                InputAction::CloseOverlay(OverlayKind::Detail)
            }
            _ => InputAction::InvalidInput,
        }
    }
}
