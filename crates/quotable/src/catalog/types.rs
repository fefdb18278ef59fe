//! Quote and favorite-set types
//!
//! Shared types used across the catalog, filters, and persistence.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::share::AUTHOR_SEPARATOR;

// =============================================================================
// QuoteId
// =============================================================================

/// Identifier of a quote within its catalog
///
/// Serialized as a bare integer so a favorites list reads `[1, 2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(pub u32);

impl QuoteId {
    /// Raw numeric value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for QuoteId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Quote
// =============================================================================

/// An immutable quotation record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    /// The quotation itself
    pub text: String,
    pub author: String,
    /// Category name, drawn from the catalog's category list
    pub category: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(
        id: impl Into<QuoteId>,
        text: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            author: author.into(),
            category: category.into(),
        }
    }

    /// Text used when sharing or copying: `"<text>" - <author>`
    pub fn share_text(&self) -> String {
        format!("\"{}\"{}{}", self.text, AUTHOR_SEPARATOR, self.author)
    }
}

// =============================================================================
// FavoriteSet
// =============================================================================

/// Set of favorited quote ids
///
/// Keeps insertion order so the persisted array matches the order in
/// which the user marked quotes. Ids are not checked against any catalog;
/// stale ids simply never match during filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<QuoteId>", into = "Vec<QuoteId>")]
pub struct FavoriteSet {
    ids: Vec<QuoteId>,
}

impl FavoriteSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check membership
    pub fn contains(&self, id: QuoteId) -> bool {
        self.ids.contains(&id)
    }

    /// Add an id at the end. Returns false if it was already present.
    pub fn insert(&mut self, id: QuoteId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove an id. Returns false if it was absent.
    pub fn remove(&mut self, id: QuoteId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&existing| existing != id);
        self.ids.len() != before
    }

    /// Flip membership of an id. Returns true if the id is now present.
    pub fn toggle(&mut self, id: QuoteId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Ids in insertion order
    pub fn ids(&self) -> &[QuoteId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = QuoteId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<QuoteId>> for FavoriteSet {
    fn from(ids: Vec<QuoteId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<FavoriteSet> for Vec<QuoteId> {
    fn from(set: FavoriteSet) -> Self {
        set.ids
    }
}

impl FromIterator<QuoteId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = QuoteId>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
