//! Detail selector.

use crate::catalog::Book;

/// Find a book by id with a linear scan; the first match wins.
pub fn resolve<'a>(books: &'a [Book], id: &str) -> Option<&'a Book> {
    books.iter().find(|book| book.id == id)
}
