//! Quote catalog sources
//!
//! Defines the read-only catalog interface and the in-memory implementation
//! used for both the built-in quotes and JSON catalog files.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::catalog::types::{Quote, QuoteId};
use crate::config::catalog::{ALL, BUILTIN_CATEGORIES};
use crate::error::{QuoteError, Result};

/// A read-only, ordered source of quotes
///
/// The catalog never changes for the lifetime of a process. Views borrow
/// its quotes and filter them; nothing writes back.
pub trait QuoteCatalog: Send + Sync {
    /// All quotes in display order
    fn quotes(&self) -> &[Quote];

    /// Category names in display order (without the `"All"` pseudo-category)
    fn categories(&self) -> &[String];

    /// Look up a single quote by id
    fn get(&self, id: QuoteId) -> Option<&Quote> {
        self.quotes().iter().find(|q| q.id == id)
    }
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Option<Vec<String>>,
    quotes: Vec<Quote>,
}

/// Catalog held entirely in memory
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    categories: Vec<String>,
    quotes: Vec<Quote>,
}

impl StaticCatalog {
    /// Build a validated catalog
    ///
    /// When `categories` is `None` the list is derived from the quotes in
    /// first-appearance order. Otherwise every quote must use one of them.
    pub fn new(categories: Option<Vec<String>>, quotes: Vec<Quote>) -> Result<Self> {
        let categories = match categories {
            Some(explicit) => {
                let mut seen = HashSet::new();
                for name in &explicit {
                    if !seen.insert(name.as_str()) {
                        return Err(QuoteError::Catalog(format!(
                            "duplicate category '{}'",
                            name
                        )));
                    }
                }
                explicit
            }
            None => {
                let mut derived: Vec<String> = Vec::new();
                for quote in &quotes {
                    if !derived.contains(&quote.category) {
                        derived.push(quote.category.clone());
                    }
                }
                derived
            }
        };

        if categories.iter().any(|c| c == ALL) {
            return Err(QuoteError::Catalog(format!(
                "'{}' is reserved and cannot be used as a category",
                ALL
            )));
        }

        let mut ids = HashSet::new();
        for quote in &quotes {
            if quote.id.get() == 0 {
                return Err(QuoteError::Catalog(
                    "quote ids must be positive, found 0".to_string(),
                ));
            }
            if !ids.insert(quote.id) {
                return Err(QuoteError::Catalog(format!(
                    "duplicate quote id {}",
                    quote.id
                )));
            }
            if quote.text.trim().is_empty() {
                return Err(QuoteError::Catalog(format!(
                    "quote {} has empty text",
                    quote.id
                )));
            }
            if !categories.contains(&quote.category) {
                return Err(QuoteError::Catalog(format!(
                    "quote {} uses unknown category '{}'",
                    quote.id, quote.category
                )));
            }
        }

        Ok(Self { categories, quotes })
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        Self {
            categories: BUILTIN_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            quotes: vec![
                Quote::new(
                    1,
                    "The only way to do great work is to love what you do.",
                    "Steve Jobs",
                    "Success",
                ),
                Quote::new(
                    2,
                    "Life is what happens when you're busy making other plans.",
                    "John Lennon",
                    "Life",
                ),
            ],
        }
    }

    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.categories, file.quotes)
    }

    /// Load a catalog from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| io::Error::new(e.kind(), format!("Failed to read {:?}: {}", path, e)))?;
        let catalog = Self::from_json(&content).map_err(|e| match e {
            QuoteError::Catalog(msg) => QuoteError::Catalog(format!("{:?}: {}", path, msg)),
            QuoteError::Json(err) => {
                QuoteError::Catalog(format!("Failed to parse {:?}: {}", path, err))
            }
            other => other,
        })?;
        tracing::debug!(path = ?path, quotes = catalog.quotes.len(), "loaded catalog");
        Ok(catalog)
    }
}

impl QuoteCatalog for StaticCatalog {
    fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}
