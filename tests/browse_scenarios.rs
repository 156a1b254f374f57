use chrono::{TimeZone, Utc};
use shelfview::browse::FilterCriteria;
use shelfview::catalog::{Book, Catalog};
use shelfview::overlay::OverlayKind;
use shelfview::render::ScreenState;
use shelfview::theme::{ColorTokens, Rgb, ThemeController, ThemeMode};
use shelfview::view::{DetailView, PreviewSummary, SelectOption, ViewPort};
use shelfview::BrowseController;
use std::collections::BTreeMap;

/// Records every call the controller makes, in order.
#[derive(Default)]
struct RecordingView {
    calls: Vec<String>,
    rows: Vec<PreviewSummary>,
    remaining: Option<usize>,
    no_results: Option<bool>,
    detail: Option<DetailView>,
    detail_open: bool,
    tokens: Option<ColorTokens>,
}

impl ViewPort for RecordingView {
    fn show_books(&mut self, previews: Vec<PreviewSummary>) {
        self.calls.push(format!("show:{}", previews.len()));
        self.rows = previews;
    }

    fn append_books(&mut self, previews: Vec<PreviewSummary>) {
        self.calls.push(format!("append:{}", previews.len()));
        self.rows.extend(previews);
    }

    fn set_remaining_label(&mut self, remaining: usize) {
        self.remaining = Some(remaining);
    }

    fn set_no_results_visible(&mut self, visible: bool) {
        self.no_results = Some(visible);
    }

    fn set_overlay_open(&mut self, kind: OverlayKind, open: bool) {
        self.calls.push(format!("{kind}:{open}"));
        if kind == OverlayKind::Detail {
            self.detail_open = open;
        }
    }

    fn show_detail(&mut self, detail: DetailView) {
        self.detail = Some(detail);
    }

    fn apply_theme(&mut self, tokens: ColorTokens) {
        self.tokens = Some(tokens);
    }

    fn set_filter_options(&mut self, _authors: Vec<SelectOption>, _genres: Vec<SelectOption>) {}

    fn focus_search_title(&mut self) {
        self.calls.push("focus-title".to_string());
    }

    fn scroll_to_top(&mut self) {}

    fn set_status(&mut self, _message: Option<String>) {}
}

fn book(id: &str, title: &str, author: &str, genres: &[&str], year: i32) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        image: format!("https://example.com/{id}.jpg"),
        description: format!("Description of {title}"),
        published: Utc.with_ymd_and_hms(year, 6, 1, 12, 0, 0).unwrap(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn catalog_of(count: usize, page_size: usize) -> Catalog {
    let books = (0..count)
        .map(|i| book(&format!("b{i:02}"), &format!("Volume {i}"), "anon", &["essay"], 2000))
        .collect();
    Catalog::new(
        books,
        table(&[("anon", "Anonymous")]),
        table(&[("essay", "Essay")]),
        page_size,
    )
    .unwrap()
}

fn dune_catalog() -> Catalog {
    Catalog::new(
        vec![
            book("emma", "Emma", "austen", &["romance"], 1815),
            book("messiah", "Dune Messiah", "herbert", &["fiction"], 1969),
            book("persuasion", "Persuasion", "austen", &["romance"], 1817),
        ],
        table(&[("austen", "Jane Austen"), ("herbert", "Frank Herbert")]),
        table(&[("romance", "Romance"), ("fiction", "Fiction")]),
        20,
    )
    .unwrap()
}

fn controller(catalog: &Catalog) -> BrowseController<'_> {
    BrowseController::new(catalog, ThemeController::new(ThemeMode::Day))
}

#[test]
fn scenario_a_default_criteria_paginates_25_books_by_20() {
    let catalog = catalog_of(25, 20);
    let mut controller = controller(&catalog);
    let mut view = RecordingView::default();

    controller.start(&mut view);
    assert_eq!(view.rows.len(), 20);
    assert_eq!(view.remaining, Some(5));
    assert_eq!(view.no_results, Some(false));

    assert!(controller.show_more(&mut view));
    assert_eq!(view.rows.len(), 25);
    assert_eq!(view.remaining, Some(0));
    assert_eq!(view.calls, vec!["show:20", "append:5"]);

    let ids: Vec<&str> = view.rows.iter().map(|r| r.id.as_str()).collect();
    let expected: Vec<&str> = catalog.books().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, expected);

    assert!(!controller.show_more(&mut view));
    assert_eq!(view.rows.len(), 25);
    assert_eq!(view.calls.len(), 2);
    assert_eq!(controller.state().page(), 2);
}

#[test]
fn scenario_b_title_query_variants_match_identically() {
    let catalog = dune_catalog();
    for query in ["dune", "DUNE", "dune ", " Dune"] {
        let mut controller = controller(&catalog);
        let mut view = RecordingView::default();
        controller.start(&mut view);

        controller.submit_filter(FilterCriteria::from_form(query, "any", "any"), &mut view);
        assert_eq!(view.rows.len(), 1, "query {query:?}");
        assert_eq!(view.rows[0].title, "Dune Messiah");
        assert_eq!(view.rows[0].author_name, "Frank Herbert");
        assert_eq!(view.no_results, Some(false));
    }
}

#[test]
fn scenario_c_unknown_genre_shows_no_results() {
    let catalog = dune_catalog();
    let mut controller = controller(&catalog);
    let mut view = RecordingView::default();
    controller.start(&mut view);

    controller.submit_filter(FilterCriteria::from_form("", "any", "sci-fi"), &mut view);
    assert!(view.rows.is_empty());
    assert_eq!(view.no_results, Some(true));
    assert_eq!(view.remaining, Some(0));

    controller.submit_filter(FilterCriteria::default(), &mut view);
    assert_eq!(view.no_results, Some(false));
    assert_eq!(view.rows.len(), 3);
}

#[test]
fn scenario_d_detail_only_opens_for_known_ids() {
    let catalog = dune_catalog();
    let mut controller = controller(&catalog);
    let mut view = RecordingView::default();
    controller.start(&mut view);

    assert!(!controller.select_preview("no-such-book", &mut view));
    assert!(!view.detail_open);
    assert!(view.detail.is_none());
    assert!(!controller.overlays().is_open(OverlayKind::Detail));

    assert!(controller.select_preview("persuasion", &mut view));
    assert!(view.detail_open);
    assert_eq!(
        view.detail,
        Some(DetailView {
            backdrop: "https://example.com/persuasion.jpg".to_string(),
            image: "https://example.com/persuasion.jpg".to_string(),
            title: "Persuasion".to_string(),
            subtitle: "Jane Austen (1817)".to_string(),
            description: "Description of Persuasion".to_string(),
        })
    );
    assert_eq!(
        controller.state().selected().map(|b| b.id.as_str()),
        Some("persuasion")
    );
}

#[test]
fn scenario_e_theme_round_trip() {
    let catalog = dune_catalog();
    let mut controller = controller(&catalog);
    let mut view = RecordingView::default();
    controller.start(&mut view);
    let original = view.tokens.unwrap();
    assert_eq!(original.dark, Rgb(10, 10, 20));

    controller.toggle_theme(ThemeMode::Night, &mut view);
    assert_eq!(view.tokens.unwrap().dark, Rgb(255, 255, 255));
    controller.toggle_theme(ThemeMode::Day, &mut view);
    assert_eq!(view.tokens, Some(original));
}

#[test]
fn refilter_always_resets_to_first_page() {
    let catalog = catalog_of(100, 10);
    let mut controller = controller(&catalog);
    let mut view = RecordingView::default();
    controller.start(&mut view);

    for _ in 0..4 {
        controller.show_more(&mut view);
    }
    assert_eq!(controller.state().page(), 5);

    controller.submit_filter(FilterCriteria::from_form("volume 1", "any", "any"), &mut view);
    assert_eq!(controller.state().page(), 1);
    // "Volume 1" and "Volume 10".."Volume 19"
    assert_eq!(controller.state().matches().len(), 11);
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.remaining, Some(1));
}

#[test]
fn remaining_zero_iff_show_more_does_nothing() {
    let catalog = catalog_of(23, 5);
    let mut controller = controller(&catalog);
    let mut view = RecordingView::default();
    controller.start(&mut view);

    loop {
        let remaining = view.remaining.unwrap();
        let advanced = controller.show_more(&mut view);
        assert_eq!(advanced, remaining > 0);
        if !advanced {
            break;
        }
    }
    assert_eq!(view.rows.len(), 23);
}

#[test]
fn opening_search_focuses_title_once() {
    let catalog = dune_catalog();
    let mut controller = controller(&catalog);
    let mut view = RecordingView::default();

    controller.open_overlay(OverlayKind::Search, &mut view);
    controller.open_overlay(OverlayKind::Search, &mut view);
    assert_eq!(view.calls, vec!["search:true", "focus-title"]);

    controller.submit_filter(FilterCriteria::default(), &mut view);
    assert_eq!(view.calls.last().map(String::as_str), Some("search:false"));
}

#[test]
fn overlays_may_overlap() {
    let catalog = dune_catalog();
    let mut controller = controller(&catalog);
    let mut screen = ScreenState::new(80, 24, ThemeMode::Day);
    controller.start(&mut screen);

    controller.select_preview("emma", &mut screen);
    controller.open_overlay(OverlayKind::Settings, &mut screen);
    assert!(screen.detail_open);
    assert!(screen.settings_open);

    controller.toggle_theme(ThemeMode::Night, &mut screen);
    assert!(screen.detail_open);
    assert!(!screen.settings_open);
}

#[test]
fn sample_catalog_browses_end_to_end() {
    let catalog = Catalog::sample().unwrap();
    let mut controller = controller(&catalog);
    let mut screen = ScreenState::new(80, 24, ThemeMode::Day);
    controller.start(&mut screen);

    controller.submit_filter(FilterCriteria::from_form("", "a-verne", "any"), &mut screen);
    assert_eq!(screen.previews.len(), 3);
    assert!(screen.previews.iter().all(|p| p.author_name == "Jules Verne"));
    assert_eq!(screen.remaining, 0);
}
