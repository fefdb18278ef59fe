//! Quotable — quote catalog engine
//!
//! Quote types, catalog sources, category/favorites filtering, and the
//! share action with clipboard fallback.
//!
//! ## Quick start
//!
//! ```
//! use quotable::catalog::{filter_by_category, QuoteCatalog, StaticCatalog};
//!
//! let catalog = StaticCatalog::builtin();
//! let life = filter_by_category(catalog.quotes(), "Life");
//! assert_eq!(life.len(), 1);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod share;

pub use catalog::{FavoriteSet, Quote, QuoteId};
pub use error::{QuoteError, Result};
