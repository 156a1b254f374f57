//! Application orchestration layer
//!
//! Wires the catalog, the browse controller, the screen model and the terminal renderer
//! together. Input arrives from a dedicated thread; each event is handled to completion before
//! the next one is read.

pub mod controller;
pub mod runtime;

pub use controller::BrowseController;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::input::{Focus, InputAction, InputStateMachine};
use crate::overlay::OverlayKind;
use crate::render::ui::{ScreenState, UIRenderer};
use crate::theme::ThemeController;
use crate::view::ViewPort;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application orchestrator
pub struct Application {
    catalog: Catalog,
    theme: ThemeController,
    ui_renderer: Box<dyn UIRenderer>,
}

impl Application {
    pub fn new(catalog: Catalog, theme: ThemeController, ui_renderer: Box<dyn UIRenderer>) -> Self {
        Self {
            catalog,
            theme,
            ui_renderer,
        }
    }

    /// Run the interactive event loop until the user quits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;

        let (width, height) = self.ui_renderer.terminal_size()?;
        let mut screen = ScreenState::new(width, height, self.theme.mode());
        let mut controller = BrowseController::new(&self.catalog, self.theme.clone());
        controller.start(&mut screen);

        let (tx, mut rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_thread =
            match runtime::spawn_input_thread(tx, Arc::clone(&shutdown), INPUT_POLL_INTERVAL) {
                Ok(handle) => handle,
                Err(err) => {
                    self.ui_renderer.cleanup()?;
                    return Err(err);
                }
            };

        let mut keys = InputStateMachine::new();
        let mut result = self.ui_renderer.render(&screen);

        while result.is_ok() {
            let Some(event) = rx.recv().await else {
                break;
            };

            keys.set_focus(Focus::from(controller.overlays().focused()));
            let action = keys.handle_raw_event(event);
            if !execute_action(&mut controller, &mut screen, action) {
                break;
            }

            result = self.ui_renderer.render(&screen);
        }

        shutdown.store(true, Ordering::SeqCst);
        drop(rx);
        if input_thread.join().is_err() {
            log::error!("input thread panicked");
        }

        self.ui_renderer.cleanup()?;
        result
    }
}

/// Apply one input action. Returns false if the application should quit.
pub fn execute_action(
    controller: &mut BrowseController<'_>,
    screen: &mut ScreenState,
    action: InputAction,
) -> bool {
    match action {
        InputAction::Quit => return false,

        InputAction::MoveCursor { direction, rows } => screen.move_cursor(direction, rows),
        InputAction::CursorToStart => screen.scroll_to_top(),
        InputAction::CursorToEnd => screen.cursor_to_end(),

        InputAction::ShowMore => {
            controller.show_more(screen);
        }

        InputAction::SelectHighlighted => {
            if let Some(id) = screen.highlighted_id().map(str::to_owned) {
                controller.select_preview(&id, screen);
            }
        }

        InputAction::OpenOverlay(kind) => {
            if kind == OverlayKind::Settings {
                screen.settings_form.mode = controller.theme().mode();
            }
            controller.open_overlay(kind, screen);
        }
        InputAction::CloseOverlay(kind) => controller.close_overlay(kind, screen),

        InputAction::FormInput(ch) => screen.search_form.input(ch),
        InputAction::FormBackspace => screen.search_form.backspace(),
        InputAction::FormField(step) => screen.search_form.move_field(step),
        InputAction::FormCycle(step) => {
            if controller.overlays().is_open(OverlayKind::Search) {
                screen.search_form.cycle(step);
            } else {
                screen.settings_form.cycle();
            }
        }

        InputAction::SubmitSearch => {
            let criteria = screen.search_form.criteria();
            controller.submit_filter(criteria, screen);
        }
        InputAction::SubmitSettings => {
            let mode = screen.settings_form.mode;
            controller.toggle_theme(mode, screen);
        }

        InputAction::Resize { width, height } => {
            screen.update_terminal_size(width, height);
        }

        InputAction::NoAction | InputAction::InvalidInput => {}
    }
    true
}
