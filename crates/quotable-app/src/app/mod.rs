//! Views
//!
//! The quote list and favorites list, each binding the catalog to its own
//! favorites store.

pub mod controller;
pub mod state;

pub use controller::{FavoritesBoard, QuoteBoard};
pub use state::Notice;
