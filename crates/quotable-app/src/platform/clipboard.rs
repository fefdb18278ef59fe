//! System clipboard writer
//!
//! Pipes text into the first clipboard utility found on the host.

use quotable::error::{QuoteError, Result};
use quotable::share::ClipboardWriter;
use std::io::ErrorKind;

use super::{pipe_to_command, split_command};

/// Clipboard utilities tried in order
const DEFAULT_CANDIDATES: [&str; 5] = [
    "wl-copy",
    "xclip -selection clipboard",
    "xsel --clipboard --input",
    "pbcopy",
    "clip.exe",
];

/// Clipboard writer backed by command-line clipboard tools
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    candidates: Vec<String>,
}

impl SystemClipboard {
    /// Use the usual clipboard tools for Wayland, X11, macOS, and WSL
    pub fn new() -> Self {
        Self::with_candidates(DEFAULT_CANDIDATES.iter().map(|c| c.to_string()).collect())
    }

    /// Use a custom list of clipboard command lines
    pub fn with_candidates(candidates: Vec<String>) -> Self {
        Self { candidates }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        for candidate in &self.candidates {
            let Some((program, args)) = split_command(candidate) else {
                continue;
            };

            match pipe_to_command(&program, &args, text) {
                Ok(status) if status.success() => {
                    tracing::debug!(program = %program, "copied to clipboard");
                    return Ok(());
                }
                Ok(status) => {
                    tracing::debug!(program = %program, %status, "clipboard tool failed");
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::debug!(program = %program, error = %e, "clipboard tool failed");
                }
            }
        }

        Err(QuoteError::Clipboard(
            "no working clipboard utility found".to_string(),
        ))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> std::path::PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("quotable_clip_test_{}.txt", id))
    }

    #[test]
    fn test_skips_missing_tools() {
        let path = temp_path();
        let clipboard = SystemClipboard::with_candidates(vec![
            "quotable-no-such-tool".to_string(),
            format!("tee {}", path.display()),
        ]);

        clipboard.write_text("\"Hi\" - Me").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "\"Hi\" - Me");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_skips_failing_tools() {
        let path = temp_path();
        let clipboard = SystemClipboard::with_candidates(vec![
            "false".to_string(),
            format!("tee {}", path.display()),
        ]);

        clipboard.write_text("text").unwrap();
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_no_tools_is_error() {
        let clipboard = SystemClipboard::with_candidates(vec!["quotable-no-such-tool".to_string()]);
        assert!(matches!(
            clipboard.write_text("text"),
            Err(QuoteError::Clipboard(_))
        ));
    }
}
