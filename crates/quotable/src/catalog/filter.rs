//! Catalog filters
//!
//! Pure functions over a catalog slice. Both preserve catalog order.

use crate::catalog::types::{FavoriteSet, Quote};
use crate::config::catalog::ALL;

/// Quotes in `category`, or every quote when `category` is `"All"`
///
/// An unknown category yields an empty list.
pub fn filter_by_category<'a>(catalog: &'a [Quote], category: &str) -> Vec<&'a Quote> {
    if category == ALL {
        return catalog.iter().collect();
    }
    catalog.iter().filter(|q| q.category == category).collect()
}

/// Quotes whose id is in `favorites`, in catalog order (not favorite order)
pub fn filter_favorited<'a>(catalog: &'a [Quote], favorites: &FavoriteSet) -> Vec<&'a Quote> {
    catalog.iter().filter(|q| favorites.contains(q.id)).collect()
}
