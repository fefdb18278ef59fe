//! Quote catalog
//!
//! Quote types, catalog sources, and the filters applied by views.

pub mod filter;
pub mod source;
pub mod types;

pub use filter::{filter_by_category, filter_favorited};
pub use source::{QuoteCatalog, StaticCatalog};
pub use types::{FavoriteSet, Quote, QuoteId};
