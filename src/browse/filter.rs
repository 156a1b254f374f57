//! Filter engine.
//!
//! A book matches when all three sub-predicates hold: title substring, author, genre. The scan
//! is a single linear pass in catalog order, so the match set is always an ordered subsequence
//! of the catalog.

use crate::catalog::Book;

/// Form value that stands for "no constraint" in the author and genre selects.
pub const ANY: &str = "any";

/// One select field of the search form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Any,
    Id(String),
}

impl Selection {
    /// Interpret a raw form value, mapping `"any"` to [`Selection::Any`].
    pub fn from_form_value(value: &str) -> Self {
        if value == ANY {
            Selection::Any
        } else {
            Selection::Id(value.to_string())
        }
    }

    /// Value to put back into a form field.
    pub fn form_value(&self) -> &str {
        match self {
            Selection::Any => ANY,
            Selection::Id(id) => id,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }
}

/// Criteria captured from one search-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub title_query: String,
    pub author: Selection,
    pub genre: Selection,
}

impl FilterCriteria {
    pub fn new(title_query: impl Into<String>, author: Selection, genre: Selection) -> Self {
        Self {
            title_query: title_query.into(),
            author,
            genre,
        }
    }

    /// Build criteria from the three raw form values.
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self::new(
            title,
            Selection::from_form_value(author),
            Selection::from_form_value(genre),
        )
    }

    /// True when every field is unconstrained.
    pub fn is_unfiltered(&self) -> bool {
        self.title_query.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }
}

/// Criteria with the title query normalized once per scan.
struct Predicate<'c> {
    title: Option<String>,
    author: &'c Selection,
    genre: &'c Selection,
}

impl<'c> Predicate<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        let trimmed = criteria.title_query.trim();
        Self {
            title: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
            author: &criteria.author,
            genre: &criteria.genre,
        }
    }

    fn test(&self, book: &Book) -> bool {
        self.title_matches(book) && self.author_matches(book) && self.genre_matches(book)
    }

    fn title_matches(&self, book: &Book) -> bool {
        match &self.title {
            None => true,
            Some(query) => book.title.to_lowercase().contains(query.as_str()),
        }
    }

    fn author_matches(&self, book: &Book) -> bool {
        match self.author {
            Selection::Any => true,
            Selection::Id(id) => book.author == *id,
        }
    }

    fn genre_matches(&self, book: &Book) -> bool {
        match self.genre {
            Selection::Any => true,
            Selection::Id(id) => book.genres.contains(id),
        }
    }
}

/// Return the books matching `criteria`, in catalog order.
pub fn filter<'a>(books: &'a [Book], criteria: &FilterCriteria) -> Vec<&'a Book> {
    let predicate = Predicate::new(criteria);
    let matches: Vec<&Book> = books.iter().filter(|book| predicate.test(book)).collect();
    log::debug!(
        "filter title={:?} author={} genre={} -> {} of {}",
        criteria.title_query,
        criteria.author.form_value(),
        criteria.genre.form_value(),
        matches.len(),
        books.len()
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::book;

    fn shelf() -> Vec<Book> {
        vec![
            book("1", "Dune", "herbert", &["scifi"]),
            book("2", "Emma", "austen", &["romance", "classic"]),
            book("3", "Dune Messiah", "herbert", &["scifi", "classic"]),
            book("4", "Persuasion", "austen", &["romance"]),
        ]
    }

    fn ids(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn default_criteria_match_everything_in_order() {
        let books = shelf();
        let result = filter(&books, &FilterCriteria::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn title_is_trimmed_and_case_insensitive() {
        let books = shelf();
        for query in ["dune", "DUNE", "dune ", "  DuNe"] {
            let criteria = FilterCriteria::from_form(query, ANY, ANY);
            assert_eq!(ids(&filter(&books, &criteria)), vec!["1", "3"], "{query:?}");
        }
    }

    #[test]
    fn whitespace_title_is_unconstrained() {
        let books = shelf();
        let criteria = FilterCriteria::from_form("   ", ANY, ANY);
        assert!(criteria.is_unfiltered());
        assert_eq!(filter(&books, &criteria).len(), 4);
    }

    #[test]
    fn predicates_are_conjoined() {
        let books = shelf();
        let criteria = FilterCriteria::from_form("e", "austen", "classic");
        assert_eq!(ids(&filter(&books, &criteria)), vec!["2"]);

        let criteria = FilterCriteria::from_form("dune", "austen", ANY);
        assert!(filter(&books, &criteria).is_empty());
    }

    #[test]
    fn unknown_genre_yields_empty_result() {
        let books = shelf();
        let criteria = FilterCriteria::from_form("", ANY, "sci-fi");
        assert!(filter(&books, &criteria).is_empty());
    }

    #[test]
    fn empty_catalog_is_not_an_error() {
        assert!(filter(&[], &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn selection_form_values() {
        assert_eq!(Selection::from_form_value("any"), Selection::Any);
        assert_eq!(
            Selection::from_form_value("austen"),
            Selection::Id("austen".to_string())
        );
        assert_eq!(Selection::Id("x".into()).form_value(), "x");
        assert_eq!(Selection::Any.form_value(), ANY);
    }
}
