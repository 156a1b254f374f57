//! Overlay controller: three independent open/closed state machines.
//!
//! Overlays never exclude each other; any combination may be open at once. Each one keeps a
//! single boolean as its source of truth and notifies subscribers on real transitions only.

use std::fmt;

/// Which overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Search,
    Settings,
    Detail,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 3] = [
        OverlayKind::Search,
        OverlayKind::Settings,
        OverlayKind::Detail,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OverlayKind::Search => "search",
            OverlayKind::Settings => "settings",
            OverlayKind::Detail => "detail",
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type OpenListener = Box<dyn FnMut(bool)>;

/// Two-state machine: closed <-> open.
#[derive(Default)]
pub struct Overlay {
    open: bool,
    listeners: Vec<OpenListener>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Subscribe to open/close transitions.
    pub fn on_open_changed(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns true if the overlay was closed before.
    pub fn open(&mut self) -> bool {
        self.set_open(true)
    }

    /// Returns true if the overlay was open before.
    pub fn close(&mut self) -> bool {
        self.set_open(false)
    }

    fn set_open(&mut self, open: bool) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        for listener in &mut self.listeners {
            listener(open);
        }
        true
    }
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("open", &self.open)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// The search, settings and detail overlays.
#[derive(Debug, Default)]
pub struct OverlayController {
    search: Overlay,
    settings: Overlay,
    detail: Overlay,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: OverlayKind) -> &Overlay {
        match kind {
            OverlayKind::Search => &self.search,
            OverlayKind::Settings => &self.settings,
            OverlayKind::Detail => &self.detail,
        }
    }

    pub fn get_mut(&mut self, kind: OverlayKind) -> &mut Overlay {
        match kind {
            OverlayKind::Search => &mut self.search,
            OverlayKind::Settings => &mut self.settings,
            OverlayKind::Detail => &mut self.detail,
        }
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.get(kind).is_open()
    }

    /// Open `kind`, then run `after_open` once if the overlay actually opened.
    pub fn open_with(&mut self, kind: OverlayKind, after_open: impl FnOnce()) -> bool {
        let opened = self.get_mut(kind).open();
        if opened {
            after_open();
        }
        opened
    }

    pub fn open(&mut self, kind: OverlayKind) -> bool {
        self.open_with(kind, || {})
    }

    pub fn close(&mut self, kind: OverlayKind) -> bool {
        self.get_mut(kind).close()
    }

    /// Overlay that receives keyboard input: search, then settings, then detail.
    pub fn focused(&self) -> Option<OverlayKind> {
        OverlayKind::ALL
            .into_iter()
            .find(|kind| self.is_open(*kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn overlays_are_independent() {
        let mut overlays = OverlayController::new();
        assert!(overlays.open(OverlayKind::Detail));
        assert!(overlays.open(OverlayKind::Settings));
        assert!(overlays.is_open(OverlayKind::Detail));
        assert!(overlays.is_open(OverlayKind::Settings));
        assert!(!overlays.is_open(OverlayKind::Search));

        assert!(overlays.close(OverlayKind::Settings));
        assert!(overlays.is_open(OverlayKind::Detail));
    }

    #[test]
    fn repeated_transitions_are_noops() {
        let mut overlay = Overlay::new();
        assert!(!overlay.close());
        assert!(overlay.open());
        assert!(!overlay.open());
    }

    #[test]
    fn listeners_see_real_transitions_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut overlay = Overlay::new();
        let sink = Rc::clone(&seen);
        overlay.on_open_changed(move |open| sink.borrow_mut().push(open));

        overlay.open();
        overlay.open();
        overlay.close();
        overlay.close();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn after_open_runs_once() {
        let mut overlays = OverlayController::new();
        let mut calls = 0;
        overlays.open_with(OverlayKind::Search, || calls += 1);
        overlays.open_with(OverlayKind::Search, || calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn focus_priority() {
        let mut overlays = OverlayController::new();
        assert_eq!(overlays.focused(), None);
        overlays.open(OverlayKind::Detail);
        assert_eq!(overlays.focused(), Some(OverlayKind::Detail));
        overlays.open(OverlayKind::Search);
        assert_eq!(overlays.focused(), Some(OverlayKind::Search));
    }
}
