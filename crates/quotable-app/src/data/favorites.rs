//! Favorites management
//!
//! Keeps the set of favorited quote ids and writes it through to a
//! `KeyValueStore` after every change.

use crate::config::storage::FAVORITES_KEY;
use crate::data::storage::KeyValueStore;
use crate::error::{AppError, Result};
use quotable::catalog::{filter_favorited, FavoriteSet, Quote, QuoteId};

/// Manages favorites in memory, persisted on every mutation
///
/// The in-memory set is authoritative. If a write fails the change is kept
/// for the session and the store is marked dirty until a later write
/// succeeds.
pub struct FavoritesStore<S> {
    store: S,
    favorites: FavoriteSet,
    /// Whether the last write to `store` failed
    dirty: bool,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load favorites from `store`
    ///
    /// Never fails: an absent value, an unreadable store, or malformed
    /// content all produce an empty set.
    pub fn load(store: S) -> Self {
        let favorites = read_favorites(&store);
        Self {
            store,
            favorites,
            dirty: false,
        }
    }

    /// Discard in-memory state and read the store again
    ///
    /// Changes whose write failed (`is_dirty()`) are lost; call `persist()`
    /// first to keep them.
    pub fn reload(&mut self) {
        if self.dirty {
            tracing::warn!(
                count = self.favorites.len(),
                "reloading favorites over unsaved changes"
            );
        }
        self.favorites = read_favorites(&self.store);
        self.dirty = false;
    }

    /// Add `id` if absent, remove it if present, then persist
    pub fn toggle(&mut self, id: QuoteId) -> &FavoriteSet {
        let added = self.favorites.toggle(id);
        tracing::debug!(quote = %id, added, "toggled favorite");
        self.persist_quietly();
        &self.favorites
    }

    /// Remove `id` if present, then persist
    ///
    /// Idempotent: removing an absent id still rewrites the current set.
    pub fn remove(&mut self, id: QuoteId) -> &FavoriteSet {
        self.favorites.remove(id);
        self.persist_quietly();
        &self.favorites
    }

    /// Write the current set to the store
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.favorites)
            .map_err(|e| AppError::Storage(format!("Failed to serialize favorites: {}", e)))?;

        match self.store.set(FAVORITES_KEY, &json) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                Err(e)
            }
        }
    }

    fn persist_quietly(&mut self) {
        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, "failed to persist favorites, keeping in-memory state");
        }
    }

    /// Whether the last write failed
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Check if a quote is favorited
    pub fn contains(&self, id: QuoteId) -> bool {
        self.favorites.contains(id)
    }

    /// Favorited quotes of `catalog`, in catalog order
    pub fn favorited<'a>(&self, catalog: &'a [Quote]) -> Vec<&'a Quote> {
        filter_favorited(catalog, &self.favorites)
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}

fn read_favorites<S: KeyValueStore>(store: &S) -> FavoriteSet {
    let raw = match store.get(FAVORITES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return FavoriteSet::new(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read favorites, starting empty");
            return FavoriteSet::new();
        }
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(error = %e, "malformed favorites value, starting empty");
            return FavoriteSet::new();
        }
    };

    // Elements that can't be a quote id are dropped one by one; the rest survive
    let set: FavoriteSet = values
        .into_iter()
        .filter_map(|value| match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
            Some(id) => Some(QuoteId(id)),
            None => {
                tracing::warn!(value = %value, "skipping invalid favorite id");
                None
            }
        })
        .collect();
    tracing::debug!(count = set.len(), "loaded favorites");
    set
}
