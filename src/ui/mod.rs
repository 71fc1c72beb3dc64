//! Plain-text rendering of the search page.
//!
//! [`render_state`] turns a [`ViewState`](crate::search::ViewState) into the
//! text the terminal front end prints: a loading placeholder, an error block,
//! a start prompt, a no-results hint, or the result list with pagination.

pub mod result_item;
pub mod result_list;

pub use result_item::{format_published_date, render_result};
pub use result_list::{render_pagination, render_state};
