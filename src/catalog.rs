//! Catalog store: the read-only book collection plus its author and genre tables.
//!
//! A catalog is decoded once from JSON at startup and never mutated afterwards. Every other
//! component borrows it. Validation happens here so the browsing code can rely on unique book
//! ids and resolvable author/genre references without re-checking them.

use crate::error::{Result, ShelfError};
use chrono::{DateTime, Datelike, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::path::Path;

/// Number of previews revealed per page when neither the catalog nor the user says otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 36;

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

/// A single book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Key into the catalog's author table
    pub author: String,
    /// Cover image reference (path or URI)
    pub image: String,
    pub description: String,
    pub published: DateTime<Utc>,
    /// Keys into the catalog's genre table
    pub genres: BTreeSet<String>,
}

impl Book {
    /// Year the book was published, as shown in the detail subtitle
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}

/// Id to display-name table that keeps the order entries were written in.
///
/// The search form lists authors and genres in catalog order, which a sorted map would lose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    entries: Vec<(String, String)>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. A repeated id keeps its first position and takes the new name.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let id = id.into();
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, existing_name)) => *existing_name = name,
            None => self.entries.push((id, name)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, name)| name.as_str())
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// `(id, name)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = NameTable::new();
        for (id, name) in iter {
            table.insert(id, name);
        }
        table
    }
}

impl From<BTreeMap<String, String>> for NameTable {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl<'de> Deserialize<'de> for NameTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = NameTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping ids to display names")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<NameTable, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = NameTable::new();
                while let Some((id, name)) = map.next_entry::<String, String>()? {
                    table.insert(id, name);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

/// On-disk layout of a catalog file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    books: Vec<Book>,
    authors: NameTable,
    genres: NameTable,
    #[serde(default)]
    books_per_page: Option<usize>,
}

/// Immutable in-memory catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: NameTable,
    genres: NameTable,
    page_size: usize,
}

impl Catalog {
    /// Build a catalog from its parts, enforcing the store invariants.
    pub fn new(
        books: Vec<Book>,
        authors: impl Into<NameTable>,
        genres: impl Into<NameTable>,
        page_size: usize,
    ) -> Result<Self> {
        let authors = authors.into();
        let genres = genres.into();
        if page_size == 0 {
            return Err(ShelfError::invalid_catalog("page size must be at least 1"));
        }

        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(ShelfError::invalid_catalog(format!(
                    "duplicate book id '{}'",
                    book.id
                )));
            }
            if !authors.contains_key(&book.author) {
                return Err(ShelfError::invalid_catalog(format!(
                    "book '{}' references unknown author '{}'",
                    book.id, book.author
                )));
            }
            if let Some(genre) = book.genres.iter().find(|g| !genres.contains_key(g.as_str())) {
                return Err(ShelfError::invalid_catalog(format!(
                    "book '{}' references unknown genre '{}'",
                    book.id, genre
                )));
            }
        }

        Ok(Self {
            books,
            authors,
            genres,
            page_size,
        })
    }

    /// Decode a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(
            file.books,
            file.authors,
            file.genres,
            file.books_per_page.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    /// Read and decode a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ShelfError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let json = std::fs::read_to_string(path).map_err(|err| {
            ShelfError::file_error(format!("reading {}", path.display()), err)
        })?;
        let catalog = Self::from_json_str(&json)?;
        log::info!(
            "loaded {} books, {} authors, {} genres from {}",
            catalog.len(),
            catalog.authors.len(),
            catalog.genres.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The catalog bundled with the binary.
    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_CATALOG)
    }

    /// Same records with a different page size.
    pub fn with_page_size(self, page_size: usize) -> Result<Self> {
        Self::new(self.books, self.authors, self.genres, page_size)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &NameTable {
        &self.authors
    }

    pub fn genres(&self) -> &NameTable {
        &self.genres
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Display name for an author id
    pub fn author_name(&self, author_id: &str) -> Option<&str> {
        self.authors.get(author_id)
    }
}
