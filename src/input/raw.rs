//! Low-level input collection: crossterm polling and translation into primitive events that the
//! higher-level input service can consume.

use crate::error::{Result, ShelfError};
use ratatui::crossterm::event::{self, Event, KeyEvent, MouseEventKind};
use std::collections::VecDeque;
use std::time::Duration;

/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;

/// Low-level events surfaced by the raw input collector.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    /// One mouse wheel tick; `true` scrolls down
    Wheel { down: bool },
}

/// Collector that polls crossterm for events, dropping the ones the browser has no use for.
#[derive(Debug, Default)]
pub struct RawInputCollector {
    pending_events: VecDeque<RawInputEvent>,
}

impl RawInputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a synthetic event (primarily used by unit tests).
    pub fn process_event(&mut self, event: Event) {
        self.enqueue_event(event);
    }

    /// Retrieve the next raw input event, blocking up to `timeout`.
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<RawInputEvent>> {
        if let Some(event) = self.pop_pending() {
            return Ok(Some(event));
        }

        let poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));
        if !event::poll(poll_timeout).map_err(input_error)? {
            return Ok(None);
        }

        let event = event::read().map_err(input_error)?;
        self.enqueue_event(event);
        Ok(self.pop_pending())
    }

    fn enqueue_event(&mut self, event: Event) {
        let raw = match event {
            Event::Key(key_event) => RawInputEvent::Key(key_event),
            Event::Resize(width, height) => RawInputEvent::Resize { width, height },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => RawInputEvent::Wheel { down: true },
                MouseEventKind::ScrollUp => RawInputEvent::Wheel { down: false },
                _ => return,
            },
            _ => return,
        };
        self.pending_events.push_back(raw);
    }

    /// Pop the next pending raw event.
    pub fn pop_pending(&mut self) -> Option<RawInputEvent> {
        self.pending_events.pop_front()
    }
}

fn input_error(err: std::io::Error) -> ShelfError {
    ShelfError::ui(format!("reading terminal input: {err}"))
}
