//! Configuration constants for the quotable engine

/// Catalog-related configuration
pub mod catalog {
    /// Pseudo-category that selects every quote
    pub const ALL: &str = "All";

    /// Categories of the built-in catalog, in display order
    pub const BUILTIN_CATEGORIES: [&str; 5] = ["Inspiration", "Success", "Life", "Love", "Wisdom"];
}

/// Share-related configuration
pub mod share {
    /// Separator between quote text and author in shared text
    pub const AUTHOR_SEPARATOR: &str = " - ";
}
