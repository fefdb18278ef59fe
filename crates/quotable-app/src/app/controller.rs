//! View controllers
//!
//! `QuoteBoard` is the full, category-filtered list. `FavoritesBoard` shows
//! only favorited quotes. Each loads its own `FavoritesStore` when mounted;
//! a change made through one is seen by the other only after it calls
//! `reload()`.

use quotable::catalog::{filter_by_category, Quote, QuoteCatalog, QuoteId};
use quotable::config::catalog::ALL;
use quotable::share::{self, ClipboardWriter, ShareSheet};

use super::state::Notice;
use crate::data::favorites::FavoritesStore;
use crate::data::storage::KeyValueStore;
use crate::error::{AppError, Result};

/// Favorites page headline when nothing is saved
pub const EMPTY_HEADLINE: &str = "Start collecting your favorite quotes!";

/// Favorites page headline when at least one quote is saved
pub const COLLECTION_HEADLINE: &str = "Your personal collection of inspiring quotes";

/// Body text of the empty favorites page
pub const EMPTY_MESSAGE: &str = "You haven't saved any quotes yet.";

fn not_found(id: QuoteId) -> AppError {
    AppError::NotFound(format!("quote {}", id))
}

// =============================================================================
// QuoteBoard
// =============================================================================

/// The main quote list with category filter and favorite toggles
pub struct QuoteBoard<'c, S> {
    catalog: &'c dyn QuoteCatalog,
    favorites: FavoritesStore<S>,
    category: String,
}

impl<'c, S: KeyValueStore> QuoteBoard<'c, S> {
    /// Mount the view, loading favorites from `store`
    pub fn mount(catalog: &'c dyn QuoteCatalog, store: S) -> Self {
        Self {
            catalog,
            favorites: FavoritesStore::load(store),
            category: ALL.to_string(),
        }
    }

    /// Filter choices: `"All"` followed by the catalog's categories
    pub fn categories(&self) -> Vec<&str> {
        std::iter::once(ALL)
            .chain(self.catalog.categories().iter().map(String::as_str))
            .collect()
    }

    pub fn selected_category(&self) -> &str {
        &self.category
    }

    /// Change the category filter
    ///
    /// Any name is accepted; one the catalog doesn't use just shows nothing.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Quotes passing the current filter, in catalog order
    pub fn visible_quotes(&self) -> Vec<&'c Quote> {
        filter_by_category(self.catalog.quotes(), &self.category)
    }

    pub fn is_favorite(&self, id: QuoteId) -> bool {
        self.favorites.contains(id)
    }

    /// Flip a quote's favorite status
    pub fn toggle_favorite(&mut self, id: QuoteId) -> Result<Notice> {
        if self.catalog.get(id).is_none() {
            return Err(not_found(id));
        }
        let was_favorite = self.favorites.contains(id);
        self.favorites.toggle(id);
        Ok(if was_favorite {
            Notice::RemovedFromFavorites
        } else {
            Notice::AddedToFavorites
        })
    }

    /// Share a quote, falling back to the clipboard
    pub fn share_quote(
        &self,
        id: QuoteId,
        sheet: &dyn ShareSheet,
        clipboard: &dyn ClipboardWriter,
    ) -> Result<Notice> {
        let quote = self.catalog.get(id).ok_or_else(|| not_found(id))?;
        Ok(share::share(quote, sheet, clipboard).into())
    }

    /// Re-read favorites from storage
    pub fn reload(&mut self) {
        self.favorites.reload();
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }
}

// =============================================================================
// FavoritesBoard
// =============================================================================

/// The favorites-only list with remove and share actions
pub struct FavoritesBoard<'c, S> {
    catalog: &'c dyn QuoteCatalog,
    favorites: FavoritesStore<S>,
}

impl<'c, S: KeyValueStore> FavoritesBoard<'c, S> {
    /// Mount the view, loading favorites from `store`
    pub fn mount(catalog: &'c dyn QuoteCatalog, store: S) -> Self {
        Self {
            catalog,
            favorites: FavoritesStore::load(store),
        }
    }

    /// Favorited quotes in catalog order; stale ids are skipped
    pub fn quotes(&self) -> Vec<&'c Quote> {
        self.favorites.favorited(self.catalog.quotes())
    }

    /// True when no favorited quote exists in the catalog
    pub fn is_empty(&self) -> bool {
        self.quotes().is_empty()
    }

    pub fn headline(&self) -> &'static str {
        if self.is_empty() {
            EMPTY_HEADLINE
        } else {
            COLLECTION_HEADLINE
        }
    }

    /// Remove a quote from favorites; removing an absent id is harmless
    pub fn remove(&mut self, id: QuoteId) -> Notice {
        self.favorites.remove(id);
        Notice::RemovedFromFavorites
    }

    /// Share one of the listed quotes
    pub fn share_quote(
        &self,
        id: QuoteId,
        sheet: &dyn ShareSheet,
        clipboard: &dyn ClipboardWriter,
    ) -> Result<Notice> {
        let quote = self
            .quotes()
            .into_iter()
            .find(|q| q.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(share::share(quote, sheet, clipboard).into())
    }

    /// Re-read favorites from storage
    pub fn reload(&mut self) {
        self.favorites.reload();
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::storage::MemoryStore;
    use quotable::catalog::StaticCatalog;
    use quotable::error::{QuoteError, Result as QuoteResult};
    use std::sync::Mutex;

    struct NoShareSheet;

    impl ShareSheet for NoShareSheet {
        fn share(&self, _text: &str) -> QuoteResult<()> {
            Err(QuoteError::ShareUnavailable)
        }
    }

    #[derive(Default)]
    struct MemoryClipboard {
        text: Mutex<Option<String>>,
    }

    impl ClipboardWriter for MemoryClipboard {
        fn write_text(&self, text: &str) -> QuoteResult<()> {
            *self.text.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    fn ids(quotes: &[&Quote]) -> Vec<u32> {
        quotes.iter().map(|q| q.id.get()).collect()
    }

    #[test]
    fn test_board_starts_on_all() {
        let catalog = StaticCatalog::builtin();
        let board = QuoteBoard::mount(&catalog, MemoryStore::new());

        assert_eq!(board.selected_category(), "All");
        assert_eq!(ids(&board.visible_quotes()), vec![1, 2]);
        assert_eq!(
            board.categories(),
            vec!["All", "Inspiration", "Success", "Life", "Love", "Wisdom"]
        );
    }

    #[test]
    fn test_board_category_filter() {
        let catalog = StaticCatalog::builtin();
        let mut board = QuoteBoard::mount(&catalog, MemoryStore::new());

        board.select_category("Life");
        assert_eq!(ids(&board.visible_quotes()), vec![2]);

        board.select_category("Love");
        assert!(board.visible_quotes().is_empty());
    }

    #[test]
    fn test_toggle_notices() {
        let catalog = StaticCatalog::builtin();
        let mut board = QuoteBoard::mount(&catalog, MemoryStore::new());

        assert_eq!(board.toggle_favorite(QuoteId(1)).unwrap(), Notice::AddedToFavorites);
        assert!(board.is_favorite(QuoteId(1)));
        assert_eq!(board.toggle_favorite(QuoteId(1)).unwrap(), Notice::RemovedFromFavorites);
        assert!(!board.is_favorite(QuoteId(1)));
    }

    #[test]
    fn test_toggle_unknown_quote() {
        let catalog = StaticCatalog::builtin();
        let store = MemoryStore::new();
        let mut board = QuoteBoard::mount(&catalog, &store);

        assert!(matches!(
            board.toggle_favorite(QuoteId(99)),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(store.get("favorites").unwrap(), None);
    }

    #[test]
    fn test_share_falls_back_to_clipboard() {
        let catalog = StaticCatalog::builtin();
        let board = QuoteBoard::mount(&catalog, MemoryStore::new());
        let clipboard = MemoryClipboard::default();

        let notice = board.share_quote(QuoteId(2), &NoShareSheet, &clipboard).unwrap();
        assert_eq!(notice, Notice::CopiedToClipboard);
        assert_eq!(
            clipboard.text.lock().unwrap().as_deref(),
            Some("\"Life is what happens when you're busy making other plans.\" - John Lennon")
        );
    }

    #[test]
    fn test_favorites_page_after_toggle_and_remount() {
        let catalog = StaticCatalog::builtin();
        let store = MemoryStore::new();

        let mut board = QuoteBoard::mount(&catalog, &store);
        board.toggle_favorite(QuoteId(1)).unwrap();

        let page = FavoritesBoard::mount(&catalog, &store);
        assert_eq!(ids(&page.quotes()), vec![1]);
        assert_eq!(page.headline(), COLLECTION_HEADLINE);
    }

    #[test]
    fn test_views_do_not_live_sync() {
        let catalog = StaticCatalog::builtin();
        let store = MemoryStore::new();

        let mut board = QuoteBoard::mount(&catalog, &store);
        let mut page = FavoritesBoard::mount(&catalog, &store);

        board.toggle_favorite(QuoteId(2)).unwrap();
        assert!(page.is_empty());

        page.reload();
        assert_eq!(ids(&page.quotes()), vec![2]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let catalog = StaticCatalog::builtin();
        let store = MemoryStore::with_entry("favorites", "[1,2]");
        let mut page = FavoritesBoard::mount(&catalog, &store);

        assert_eq!(page.remove(QuoteId(1)), Notice::RemovedFromFavorites);
        assert_eq!(ids(&page.quotes()), vec![2]);
        page.remove(QuoteId(1));
        assert_eq!(ids(&page.quotes()), vec![2]);
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_empty_page_ignores_stale_ids() {
        let catalog = StaticCatalog::builtin();
        let page = FavoritesBoard::mount(&catalog, MemoryStore::with_entry("favorites", "[40,41]"));

        assert!(page.is_empty());
        assert_eq!(page.favorites().len(), 2);
        assert_eq!(page.headline(), EMPTY_HEADLINE);
    }

    #[test]
    fn test_page_share_only_listed_quotes() {
        let catalog = StaticCatalog::builtin();
        let page = FavoritesBoard::mount(&catalog, MemoryStore::with_entry("favorites", "[1]"));
        let clipboard = MemoryClipboard::default();

        assert!(page.share_quote(QuoteId(2), &NoShareSheet, &clipboard).is_err());
        assert_eq!(
            page.share_quote(QuoteId(1), &NoShareSheet, &clipboard).unwrap(),
            Notice::CopiedToClipboard
        );
    }
}
