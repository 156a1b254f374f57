//! Input subsystem: raw terminal event collection and focus-aware key bindings.

pub mod raw;
pub mod service;

// Modules outside this crate should prefer importing from `crate::input` rather than reaching
// into submodules.
pub use raw::{RawInputCollector, RawInputEvent};
pub use service::{Focus, InputAction, InputStateMachine, ScrollDirection, Step};
