//! # shelfview - Terminal Book Catalog Browser
//!
//! Browse a static book catalog in the terminal: a paginated list of previews, filtering by
//! title, author and genre, a detail overlay for the selected book and a day/night theme.
//!
//! ## Architecture
//!
//! - [`catalog`] - Read-only book records with author and genre tables
//! - [`browse`] - Filter engine, pagination cursor, detail selector and the browse state
//! - [`theme`] / [`overlay`] - Theme tokens and the three overlay state machines
//! - [`view`] - The `ViewPort` seam and the projections pushed through it
//! - [`render::ui`](crate::render::ui) - Screen model and the ratatui renderer
//! - [`input`] - Terminal event collection and key bindings
//! - [`app`] - Browse controller and the event loop

// Core modules
pub mod catalog;
pub mod config;
pub mod error;

// Browsing core
pub mod browse;
pub mod overlay;
pub mod theme;
pub mod view;

// Terminal front end
pub mod app;
pub mod input;
pub mod render;

pub use error::{Result, ShelfError};

pub use app::{Application, BrowseController};
pub use browse::{BrowseState, FilterCriteria, PaginationCursor, Selection};
pub use catalog::{Book, Catalog};
pub use theme::{ThemeController, ThemeMode};
pub use view::ViewPort;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
