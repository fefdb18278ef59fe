//! Share action
//!
//! Hands a quote to the host's native share capability and falls back to
//! the clipboard when that capability is missing or fails.

use crate::catalog::types::Quote;
use crate::error::Result;

/// Host capability that shows a native share sheet
pub trait ShareSheet: Send + Sync {
    /// Offer `text` to the user for sharing
    ///
    /// Returns `QuoteError::ShareUnavailable` when the host has no share
    /// capability at all.
    fn share(&self, text: &str) -> Result<()>;
}

/// Host capability that writes plain text to the system clipboard
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// What a share attempt ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The share sheet accepted the text
    Shared,
    /// Share failed; the text went to the clipboard instead
    CopiedToClipboard,
    /// Both share and clipboard failed
    Failed,
}

/// Share a quote, falling back to the clipboard
///
/// Best effort with no retry. Failures are logged and folded into the
/// returned outcome; this never returns an error.
pub fn share(quote: &Quote, sheet: &dyn ShareSheet, clipboard: &dyn ClipboardWriter) -> ShareOutcome {
    let text = quote.share_text();

    match sheet.share(&text) {
        Ok(()) => ShareOutcome::Shared,
        Err(e) => {
            tracing::debug!(quote = %quote.id, error = %e, "share sheet failed, copying to clipboard");
            match clipboard.write_text(&text) {
                Ok(()) => ShareOutcome::CopiedToClipboard,
                Err(e) => {
                    tracing::warn!(quote = %quote.id, error = %e, "clipboard write failed");
                    ShareOutcome::Failed
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuoteError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSheet {
        fail: bool,
        shared: Mutex<Vec<String>>,
    }

    impl ShareSheet for RecordingSheet {
        fn share(&self, text: &str) -> Result<()> {
            if self.fail {
                return Err(QuoteError::ShareUnavailable);
            }
            self.shared.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        fail: bool,
        written: Mutex<Vec<String>>,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            if self.fail {
                return Err(QuoteError::Clipboard("no clipboard".to_string()));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn quote() -> Quote {
        Quote::new(1, "Be yourself.", "Oscar Wilde", "Wisdom")
    }

    #[test]
    fn test_share_uses_sheet_first() {
        let sheet = RecordingSheet::default();
        let clipboard = RecordingClipboard::default();

        assert_eq!(share(&quote(), &sheet, &clipboard), ShareOutcome::Shared);
        assert_eq!(*sheet.shared.lock().unwrap(), vec!["\"Be yourself.\" - Oscar Wilde"]);
        assert!(clipboard.written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_share_falls_back_to_clipboard() {
        let sheet = RecordingSheet { fail: true, ..Default::default() };
        let clipboard = RecordingClipboard::default();

        assert_eq!(share(&quote(), &sheet, &clipboard), ShareOutcome::CopiedToClipboard);
        assert_eq!(*clipboard.written.lock().unwrap(), vec!["\"Be yourself.\" - Oscar Wilde"]);
    }

    #[test]
    fn test_capabilities_are_thread_safe() {
        fn assert_send_sync<T: ?Sized + Send + Sync>() {}
        assert_send_sync::<dyn ShareSheet>();
        assert_send_sync::<dyn ClipboardWriter>();
    }

    #[test]
    fn test_share_reports_total_failure() {
        let sheet = RecordingSheet { fail: true, ..Default::default() };
        let clipboard = RecordingClipboard { fail: true, ..Default::default() };

        assert_eq!(share(&quote(), &sheet, &clipboard), ShareOutcome::Failed);
    }
}
