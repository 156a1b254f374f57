//! Browsing core: which books match, how many of them are revealed, and which one is selected.
//!
//! Nothing in here touches the terminal. The controller in [`crate::app`] drives these types and
//! forwards the results to a [`crate::view::ViewPort`].

pub mod detail;
pub mod filter;
pub mod pagination;
pub mod state;

pub use detail::resolve;
pub use filter::{filter, FilterCriteria, Selection};
pub use pagination::PaginationCursor;
pub use state::BrowseState;
