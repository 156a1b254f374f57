//! Pagination cursor over the current match set.

/// Tracks how many pages of the match set have been revealed.
///
/// `visible_count() == min(total, page * page_size)` holds after every operation. The page only
/// moves forward through [`advance`](Self::advance) and goes back to 1 through
/// [`reset`](Self::reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    page: usize,
    page_size: usize,
    total: usize,
}

impl PaginationCursor {
    /// Start on page 1. A zero page size is treated as 1.
    pub fn new(page_size: usize, total: usize) -> Self {
        debug_assert!(page_size > 0, "page size must be positive");
        Self {
            page: 1,
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Return to page 1 for a freshly computed match set of `total` books.
    pub fn reset(&mut self, total: usize) {
        self.page = 1;
        self.total = total;
    }

    /// Reveal one more page. Returns false, leaving the cursor untouched, when everything is
    /// already visible.
    pub fn advance(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page += 1;
        true
    }

    fn end(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    pub fn visible_count(&self) -> usize {
        self.end().min(self.total)
    }

    /// Books left after the visible ones.
    pub fn remaining_count(&self) -> usize {
        self.total.saturating_sub(self.end())
    }

    /// Whether the "show more" control should be enabled.
    pub fn has_more(&self) -> bool {
        self.remaining_count() > 0
    }

    /// Everything revealed so far: `matches[0 .. page * page_size]`, clamped.
    pub fn visible_slice<'m, T>(&self, matches: &'m [T]) -> &'m [T] {
        &matches[..self.end().min(matches.len())]
    }

    /// Only the current page: `matches[(page - 1) * page_size .. page * page_size]`, clamped.
    pub fn next_page_slice<'m, T>(&self, matches: &'m [T]) -> &'m [T] {
        let end = self.end().min(matches.len());
        let start = ((self.page - 1).saturating_mul(self.page_size)).min(end);
        &matches[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_and_remaining() {
        let cursor = PaginationCursor::new(20, 25);
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.visible_count(), 20);
        assert_eq!(cursor.remaining_count(), 5);
        assert!(cursor.has_more());
    }

    #[test]
    fn advance_stops_at_end() {
        let mut cursor = PaginationCursor::new(20, 25);
        assert!(cursor.advance());
        assert_eq!(cursor.page(), 2);
        assert_eq!(cursor.visible_count(), 25);
        assert_eq!(cursor.remaining_count(), 0);

        assert!(!cursor.advance());
        assert_eq!(cursor.page(), 2);
    }

    #[test]
    fn slices_are_clamped() {
        let items: Vec<u32> = (0..25).collect();
        let mut cursor = PaginationCursor::new(20, items.len());
        assert_eq!(cursor.visible_slice(&items).len(), 20);
        assert_eq!(cursor.next_page_slice(&items), &items[0..20]);

        cursor.advance();
        assert_eq!(cursor.visible_slice(&items).len(), 25);
        assert_eq!(cursor.next_page_slice(&items), &items[20..25]);
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut cursor = PaginationCursor::new(2, 10);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.page(), 3);

        cursor.reset(3);
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.total(), 3);
        assert_eq!(cursor.remaining_count(), 1);
    }

    #[test]
    fn empty_match_set() {
        let mut cursor = PaginationCursor::new(36, 0);
        let items: Vec<u32> = Vec::new();
        assert_eq!(cursor.visible_count(), 0);
        assert!(!cursor.has_more());
        assert!(!cursor.advance());
        assert!(cursor.next_page_slice(&items).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_remaining() {
        let cursor = PaginationCursor::new(5, 5);
        assert_eq!(cursor.remaining_count(), 0);
        assert!(!cursor.has_more());
    }
}
