//! View port seam and the render surface projections.
//!
//! The browsing core never reaches into a screen. It talks to a [`ViewPort`], handing it
//! ready-made projections of catalog records: [`PreviewSummary`] rows for the list and a
//! [`DetailView`] for the detail overlay.

use crate::browse::filter::ANY;
use crate::catalog::{Book, Catalog, NameTable};
use crate::overlay::OverlayKind;
use crate::theme::ColorTokens;

const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Compact projection of a book for the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSummary {
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub image: String,
}

impl PreviewSummary {
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author_name: author_name(book, catalog).to_string(),
            image: book.image.clone(),
        }
    }
}

/// Fields shown by the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Blurred backdrop image
    pub backdrop: String,
    pub image: String,
    pub title: String,
    /// `"{author} ({year})"`
    pub subtitle: String,
    pub description: String,
}

impl DetailView {
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            backdrop: book.image.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", author_name(book, catalog), book.published_year()),
            description: book.description.clone(),
        }
    }
}

fn author_name<'a>(book: &Book, catalog: &'a Catalog) -> &'a str {
    catalog.author_name(&book.author).unwrap_or(UNKNOWN_AUTHOR)
}

/// One entry of a select menu in the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Build a select menu: a leading `"any"` entry, then the table in catalog order.
pub fn select_options(table: &NameTable, any_label: &str) -> Vec<SelectOption> {
    std::iter::once((ANY, any_label))
        .chain(table.iter())
        .map(|(value, label)| SelectOption {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect()
}

/// Everything the browsing core asks of a display.
pub trait ViewPort {
    /// Replace the visible list
    fn show_books(&mut self, previews: Vec<PreviewSummary>);

    /// Append to the visible list, keeping earlier rows
    fn append_books(&mut self, previews: Vec<PreviewSummary>);

    /// Update the "show more" control; zero remaining disables it
    fn set_remaining_label(&mut self, remaining: usize);

    fn set_no_results_visible(&mut self, visible: bool);

    fn set_overlay_open(&mut self, kind: OverlayKind, open: bool);

    fn show_detail(&mut self, detail: DetailView);

    fn apply_theme(&mut self, tokens: ColorTokens);

    /// Populate the author and genre selects of the search form
    fn set_filter_options(&mut self, authors: Vec<SelectOption>, genres: Vec<SelectOption>);

    /// Move keyboard focus to the title field of the search form
    fn focus_search_title(&mut self);

    fn scroll_to_top(&mut self);

    fn set_status(&mut self, message: Option<String>);
}

fn project(books: &[&Book], catalog: &Catalog) -> Vec<PreviewSummary> {
    books
        .iter()
        .map(|book| PreviewSummary::from_book(book, catalog))
        .collect()
}

/// Project `books` and append them to the view in order.
pub fn render_append(view: &mut dyn ViewPort, books: &[&Book], catalog: &Catalog) {
    view.append_books(project(books, catalog));
}

/// Clear the view's list, then append `books`.
pub fn render_replace(view: &mut dyn ViewPort, books: &[&Book], catalog: &Catalog) {
    view.show_books(project(books, catalog));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{book, table};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                book("b1", "Dune", "herbert", &["scifi"]),
                book("b2", "Emma", "austen", &[]),
            ],
            table(&[("herbert", "Frank Herbert"), ("austen", "Jane Austen")]),
            table(&[("scifi", "Science Fiction")]),
            10,
        )
        .unwrap()
    }

    #[test]
    fn preview_resolves_author_name() {
        let catalog = catalog();
        let preview = PreviewSummary::from_book(&catalog.books()[0], &catalog);
        assert_eq!(
            preview,
            PreviewSummary {
                id: "b1".into(),
                title: "Dune".into(),
                author_name: "Frank Herbert".into(),
                image: "covers/b1.jpg".into(),
            }
        );
    }

    #[test]
    fn detail_subtitle_has_author_and_year() {
        let catalog = catalog();
        let detail = DetailView::from_book(&catalog.books()[1], &catalog);
        assert_eq!(detail.subtitle, "Jane Austen (1965)");
        assert_eq!(detail.backdrop, detail.image);
        assert_eq!(detail.description, "About Emma");
    }

    #[test]
    fn select_options_lead_with_any_and_keep_catalog_order() {
        let catalog = catalog();
        let options = select_options(catalog.authors(), "All Authors");
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["All Authors", "Frank Herbert", "Jane Austen"]);
        assert_eq!(options[0].value, "any");

        let genres: NameTable = [
            ("romance", "Romance"),
            ("gothic", "Gothic"),
            ("adventure", "Adventure"),
        ]
        .into_iter()
        .collect();
        let values: Vec<String> = select_options(&genres, "All Genres")
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec!["any", "romance", "gothic", "adventure"]);
    }
}
