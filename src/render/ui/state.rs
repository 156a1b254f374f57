//! Screen model.
//!
//! `ScreenState` is what the terminal draws: the preview rows, the show-more control, the
//! no-results message, the overlays and their forms. The browse controller only reaches it
//! through the [`ViewPort`] trait; key handling edits the forms and the list cursor directly.

use crate::browse::FilterCriteria;
use crate::input::{ScrollDirection, Step};
use crate::overlay::OverlayKind;
use crate::theme::{ColorTokens, ThemeMode};
use crate::view::{DetailView, PreviewSummary, SelectOption, ViewPort};

/// Field of the search form holding focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    fn step(self, step: Step) -> Self {
        match (self, step) {
            (SearchField::Title, Step::Forward) => SearchField::Author,
            (SearchField::Author, Step::Forward) => SearchField::Genre,
            (SearchField::Genre, Step::Forward) => SearchField::Title,
            (SearchField::Title, Step::Backward) => SearchField::Genre,
            (SearchField::Author, Step::Backward) => SearchField::Title,
            (SearchField::Genre, Step::Backward) => SearchField::Author,
        }
    }
}

/// A select menu with one chosen entry.
#[derive(Debug, Clone, Default)]
pub struct Select {
    options: Vec<SelectOption>,
    index: usize,
}

impl Select {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options, index: 0 }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.options.get(self.index)
    }

    /// Form value of the chosen entry, `"any"` when the menu is empty
    pub fn value(&self) -> &str {
        self.selected()
            .map(|option| option.value.as_str())
            .unwrap_or(crate::browse::filter::ANY)
    }

    pub fn label(&self) -> &str {
        self.selected()
            .map(|option| option.label.as_str())
            .unwrap_or("")
    }

    pub fn cycle(&mut self, step: Step) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        self.index = match step {
            Step::Forward => (self.index + 1) % len,
            Step::Backward => (self.index + len - 1) % len,
        };
    }
}

/// Title, author and genre inputs.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub title: String,
    pub author: Select,
    pub genre: Select,
    pub field: SearchField,
}

impl SearchForm {
    pub fn author_options(&self) -> &[SelectOption] {
        self.author.options()
    }

    /// Snapshot the form as fresh criteria.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_form(&self.title, self.author.value(), self.genre.value())
    }

    /// Typed characters only land in the title field.
    pub fn input(&mut self, ch: char) {
        if self.field == SearchField::Title {
            self.title.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.field == SearchField::Title {
            self.title.pop();
        }
    }

    pub fn move_field(&mut self, step: Step) {
        self.field = self.field.step(step);
    }

    pub fn cycle(&mut self, step: Step) {
        match self.field {
            SearchField::Title => {}
            SearchField::Author => self.author.cycle(step),
            SearchField::Genre => self.genre.cycle(step),
        }
    }
}

/// Theme select of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsForm {
    pub mode: ThemeMode,
}

impl SettingsForm {
    pub fn cycle(&mut self) {
        self.mode = self.mode.toggled();
    }
}

/// Everything the terminal renderer needs for one frame.
#[derive(Debug)]
pub struct ScreenState {
    pub previews: Vec<PreviewSummary>,
    /// Highlighted row in `previews`
    pub list_cursor: usize,
    pub remaining: usize,
    pub no_results_visible: bool,
    pub search_open: bool,
    pub settings_open: bool,
    pub detail_open: bool,
    pub detail: Option<DetailView>,
    pub tokens: ColorTokens,
    pub search_form: SearchForm,
    pub settings_form: SettingsForm,
    pub status: Option<String>,
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl ScreenState {
    pub fn new(viewport_width: u16, viewport_height: u16, mode: ThemeMode) -> Self {
        Self {
            previews: Vec::new(),
            list_cursor: 0,
            remaining: 0,
            no_results_visible: false,
            search_open: false,
            settings_open: false,
            detail_open: false,
            detail: None,
            tokens: ColorTokens::for_mode(mode),
            search_form: SearchForm::default(),
            settings_form: SettingsForm { mode },
            status: None,
            viewport_width,
            viewport_height,
        }
    }

    /// Id of the highlighted preview
    pub fn highlighted_id(&self) -> Option<&str> {
        self.previews
            .get(self.list_cursor)
            .map(|preview| preview.id.as_str())
    }

    pub fn move_cursor(&mut self, direction: ScrollDirection, rows: usize) {
        let last = self.previews.len().saturating_sub(1);
        self.list_cursor = match direction {
            ScrollDirection::Up => self.list_cursor.saturating_sub(rows),
            ScrollDirection::Down => self.list_cursor.saturating_add(rows).min(last),
        };
    }

    pub fn cursor_to_end(&mut self) {
        self.list_cursor = self.previews.len().saturating_sub(1);
    }

    pub fn show_more_enabled(&self) -> bool {
        self.remaining > 0
    }

    pub fn show_more_label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }

    /// Returns true if dimensions actually changed
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;
        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
        }
        changed
    }
}

impl ViewPort for ScreenState {
    fn show_books(&mut self, previews: Vec<PreviewSummary>) {
        self.previews = previews;
        self.list_cursor = self.list_cursor.min(self.previews.len().saturating_sub(1));
    }

    fn append_books(&mut self, previews: Vec<PreviewSummary>) {
        self.previews.extend(previews);
    }

    fn set_remaining_label(&mut self, remaining: usize) {
        self.remaining = remaining;
    }

    fn set_no_results_visible(&mut self, visible: bool) {
        self.no_results_visible = visible;
    }

    fn set_overlay_open(&mut self, kind: OverlayKind, open: bool) {
        match kind {
            OverlayKind::Search => self.search_open = open,
            OverlayKind::Settings => self.settings_open = open,
            OverlayKind::Detail => self.detail_open = open,
        }
    }

    fn show_detail(&mut self, detail: DetailView) {
        self.detail = Some(detail);
    }

    fn apply_theme(&mut self, tokens: ColorTokens) {
        self.tokens = tokens;
    }

    fn set_filter_options(&mut self, authors: Vec<SelectOption>, genres: Vec<SelectOption>) {
        self.search_form.author = Select::new(authors);
        self.search_form.genre = Select::new(genres);
    }

    fn focus_search_title(&mut self) {
        self.search_form.field = SearchField::Title;
    }

    fn scroll_to_top(&mut self) {
        self.list_cursor = 0;
    }

    fn set_status(&mut self, message: Option<String>) {
        self.status = message;
    }
}
