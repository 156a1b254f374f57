//! Browse controller: the named actions of the book browser.
//!
//! Each action runs to completion, mutating [`BrowseState`], the overlays and the theme, then
//! pushes the visible consequences to a [`ViewPort`]. None of them can fail; out-of-range
//! requests are silent no-ops.

use crate::browse::{BrowseState, FilterCriteria};
use crate::catalog::Catalog;
use crate::overlay::{OverlayController, OverlayKind};
use crate::theme::{ThemeController, ThemeMode};
use crate::view::{render_append, render_replace, select_options, DetailView, ViewPort};

/// Owns the browse state for one session over a borrowed catalog.
#[derive(Debug)]
pub struct BrowseController<'c> {
    state: BrowseState<'c>,
    overlays: OverlayController,
    theme: ThemeController,
}

impl<'c> BrowseController<'c> {
    pub fn new(catalog: &'c Catalog, theme: ThemeController) -> Self {
        let mut overlays = OverlayController::new();
        for kind in OverlayKind::ALL {
            overlays.get_mut(kind).on_open_changed(move |open| {
                log::debug!("{kind} overlay {}", if open { "opened" } else { "closed" });
            });
        }

        Self {
            state: BrowseState::new(catalog),
            overlays,
            theme,
        }
    }

    pub fn state(&self) -> &BrowseState<'c> {
        &self.state
    }

    pub fn overlays(&self) -> &OverlayController {
        &self.overlays
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    /// Initial paint: select menus, theme, first page of the unfiltered catalog.
    pub fn start(&mut self, view: &mut dyn ViewPort) {
        let catalog = self.state.catalog();
        view.set_filter_options(
            select_options(catalog.authors(), "All Authors"),
            select_options(catalog.genres(), "All Genres"),
        );
        view.apply_theme(self.theme.tokens());
        render_replace(view, self.state.visible(), catalog);
        view.set_remaining_label(self.state.remaining());
        view.set_no_results_visible(self.state.has_no_results());
        log::info!(
            "browsing {} books, {} per page",
            catalog.len(),
            catalog.page_size()
        );
    }

    /// Replace the criteria and redraw from page 1.
    ///
    /// The selection does not survive a refilter, so an open detail overlay closes with the
    /// search overlay.
    pub fn submit_filter(&mut self, criteria: FilterCriteria, view: &mut dyn ViewPort) {
        let catalog = self.state.catalog();
        let first_page = self.state.apply_filter(criteria);
        render_replace(view, first_page, catalog);

        let total = self.state.matches().len();
        view.set_no_results_visible(total == 0);
        view.set_remaining_label(self.state.remaining());
        view.scroll_to_top();
        view.set_status(Some(match total {
            0 => "No books match your filters".to_string(),
            1 => "1 book".to_string(),
            n => format!("{n} books"),
        }));
        log::info!(
            "filter applied: {} matches, {} remaining",
            total,
            self.state.remaining()
        );

        self.close_overlay(OverlayKind::Detail, view);
        self.close_overlay(OverlayKind::Search, view);
    }

    /// Append the next page. Returns false when nothing was left to show.
    pub fn show_more(&mut self, view: &mut dyn ViewPort) -> bool {
        let catalog = self.state.catalog();
        match self.state.show_more() {
            Some(next_page) => {
                render_append(view, next_page, catalog);
                view.set_remaining_label(self.state.remaining());
                log::debug!(
                    "page {} revealed, {} remaining",
                    self.state.page(),
                    self.state.remaining()
                );
                true
            }
            None => {
                log::debug!("show more ignored: match set exhausted");
                false
            }
        }
    }

    /// Open the detail overlay for `id`. Unknown ids leave the overlay closed.
    pub fn select_preview(&mut self, id: &str, view: &mut dyn ViewPort) -> bool {
        let catalog = self.state.catalog();
        let Some(book) = self.state.select(id) else {
            log::warn!("no book with id '{id}' in the catalog");
            view.set_status(Some("Book not found".to_string()));
            return false;
        };

        view.show_detail(DetailView::from_book(book, catalog));
        self.open_overlay(OverlayKind::Detail, view);
        true
    }

    /// Apply a theme mode and close the settings overlay.
    pub fn toggle_theme(&mut self, mode: ThemeMode, view: &mut dyn ViewPort) {
        let tokens = self.theme.apply(mode);
        view.apply_theme(tokens);
        log::info!("theme set to {mode}");
        self.close_overlay(OverlayKind::Settings, view);
    }

    /// Open an overlay; opening search also focuses its title field.
    pub fn open_overlay(&mut self, kind: OverlayKind, view: &mut dyn ViewPort) {
        self.overlays.open_with(kind, || {
            view.set_overlay_open(kind, true);
            if kind == OverlayKind::Search {
                view.focus_search_title();
            }
        });
    }

    /// Close an overlay; closing the detail overlay also drops the selection.
    pub fn close_overlay(&mut self, kind: OverlayKind, view: &mut dyn ViewPort) {
        if self.overlays.close(kind) {
            if kind == OverlayKind::Detail {
                self.state.clear_selection();
            }
            view.set_overlay_open(kind, false);
        }
    }
}
