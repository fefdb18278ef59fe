//! Data persistence
//!
//! Handles the key-value store, favorites, and settings.

pub mod favorites;
pub mod settings;
pub mod storage;

// Re-export common types
pub use favorites::FavoritesStore;
pub use settings::{Settings, Theme};
pub use storage::{config_dir, default_store_path, FileStore, KeyValueStore, MemoryStore};
