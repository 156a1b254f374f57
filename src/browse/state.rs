//! Browse state: criteria, match set, pagination cursor and selection in one owned value.

use crate::browse::{detail, filter, FilterCriteria, PaginationCursor};
use crate::catalog::{Book, Catalog};

/// Everything that decides what the book list shows.
///
/// The match set borrows from the catalog, which outlives every browse session.
#[derive(Debug, Clone)]
pub struct BrowseState<'c> {
    catalog: &'c Catalog,
    criteria: FilterCriteria,
    matches: Vec<&'c Book>,
    cursor: PaginationCursor,
    selected: Option<&'c Book>,
}

impl<'c> BrowseState<'c> {
    /// Unfiltered state on page 1.
    pub fn new(catalog: &'c Catalog) -> Self {
        let matches: Vec<&Book> = catalog.books().iter().collect();
        let cursor = PaginationCursor::new(catalog.page_size(), matches.len());
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            matches,
            cursor,
            selected: None,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn matches(&self) -> &[&'c Book] {
        &self.matches
    }

    pub fn cursor(&self) -> &PaginationCursor {
        &self.cursor
    }

    pub fn page(&self) -> usize {
        self.cursor.page()
    }

    pub fn selected(&self) -> Option<&'c Book> {
        self.selected
    }

    /// Books revealed so far.
    pub fn visible(&self) -> &[&'c Book] {
        self.cursor.visible_slice(&self.matches)
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining_count()
    }

    pub fn has_no_results(&self) -> bool {
        self.matches.is_empty()
    }

    /// Replace the criteria, recompute the match set and go back to page 1.
    ///
    /// Returns the first page of the new match set.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) -> &[&'c Book] {
        self.matches = filter(self.catalog.books(), &criteria);
        self.criteria = criteria;
        self.cursor.reset(self.matches.len());
        self.selected = None;
        self.cursor.next_page_slice(&self.matches)
    }

    /// Reveal the next page and return just the newly revealed books, or `None` when the match
    /// set is exhausted.
    pub fn show_more(&mut self) -> Option<&[&'c Book]> {
        if !self.cursor.advance() {
            return None;
        }
        Some(self.cursor.next_page_slice(&self.matches))
    }

    /// Select a book by id. Unknown ids leave the previous selection untouched.
    pub fn select(&mut self, id: &str) -> Option<&'c Book> {
        let book = detail::resolve(self.catalog.books(), id)?;
        self.selected = Some(book);
        Some(book)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
