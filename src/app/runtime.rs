//! Input thread.
//!
//! crossterm polling blocks, so it runs on its own OS thread and hands raw events to the async
//! loop over an unbounded channel. The thread stops when the shutdown flag is set, when the
//! receiver is gone, or on the first terminal error.

use crate::error::{Result, ShelfError};
use crate::input::{RawInputCollector, RawInputEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

const THREAD_NAME: &str = "shelfview-input";

pub fn spawn_input_thread(
    events: UnboundedSender<RawInputEvent>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> Result<JoinHandle<()>> {
    let handle = thread::Builder::new()
        .name(THREAD_NAME.to_string())
        .spawn(move || forward_events(&events, &shutdown, poll_interval))
        .map_err(|err| ShelfError::ui(format!("spawning input thread: {err}")))?;
    Ok(handle)
}

fn forward_events(
    events: &UnboundedSender<RawInputEvent>,
    shutdown: &AtomicBool,
    poll_interval: Duration,
) {
    let mut collector = RawInputCollector::new();
    while !shutdown.load(Ordering::SeqCst) {
        let event = match collector.poll_event(Some(poll_interval)) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(err) => {
                log::error!("reading terminal input failed: {err}");
                return;
            }
        };
        if events.send(event).is_err() {
            log::debug!("event loop gone, input thread exiting");
            return;
        }
    }
    log::debug!("input thread shut down");
}
