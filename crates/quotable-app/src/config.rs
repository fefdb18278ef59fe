//! Configuration constants for quotable app services

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "quotable";
}

/// Storage-related configuration
pub mod storage {
    /// File backing the default key-value store
    pub const STORE_FILE: &str = "storage.json";

    /// Key holding the favorite quote ids
    pub const FAVORITES_KEY: &str = "favorites";

    /// Key holding the theme preference
    pub const THEME_KEY: &str = "theme";
}

/// UI-related configuration
pub mod ui {
    /// How long a notice stays visible, in milliseconds
    pub const NOTICE_DURATION_MS: u64 = 2000;
}
