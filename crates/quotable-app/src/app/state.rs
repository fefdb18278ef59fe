//! View notices
//!
//! `Notice` is the short confirmation a view hands back after a user
//! action, for the front end to show briefly.

use std::time::Duration;

use quotable::share::ShareOutcome;

use crate::config::ui::NOTICE_DURATION_MS;

/// Confirmation produced by a view action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    AddedToFavorites,
    RemovedFromFavorites,
    Shared,
    CopiedToClipboard,
    ShareFailed,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::AddedToFavorites => "Added to favorites",
            Notice::RemovedFromFavorites => "Removed from favorites",
            Notice::Shared => "Shared",
            Notice::CopiedToClipboard => "Copied to clipboard!",
            Notice::ShareFailed => "Could not share quote",
        }
    }

    /// How long the notice stays visible
    pub fn duration(&self) -> Duration {
        Duration::from_millis(NOTICE_DURATION_MS)
    }

    /// True when the notice reports a failure (for red UI text)
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::ShareFailed)
    }
}

impl From<ShareOutcome> for Notice {
    fn from(outcome: ShareOutcome) -> Self {
        match outcome {
            ShareOutcome::Shared => Notice::Shared,
            ShareOutcome::CopiedToClipboard => Notice::CopiedToClipboard,
            ShareOutcome::Failed => Notice::ShareFailed,
        }
    }
}
