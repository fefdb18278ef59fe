//! Quotable App Services
//!
//! Favorites persistence, settings, platform capabilities, and views.
//! Depends on the `quotable` engine crate.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod platform;
