//! Share sheet backed by a user-configured command

use quotable::error::{QuoteError, Result};
use quotable::share::ShareSheet;
use std::io::ErrorKind;

use super::{pipe_to_command, split_command};

/// Share sheet that hands text to an external command on stdin
///
/// With no command configured the capability reports itself as
/// unavailable, so the share action falls back to the clipboard.
#[derive(Debug, Clone, Default)]
pub struct CommandShareSheet {
    command: Option<String>,
}

impl CommandShareSheet {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    /// Share sheet with no command, always unavailable
    pub fn unavailable() -> Self {
        Self { command: None }
    }
}

impl ShareSheet for CommandShareSheet {
    fn share(&self, text: &str) -> Result<()> {
        let (program, args) = self
            .command
            .as_deref()
            .and_then(split_command)
            .ok_or(QuoteError::ShareUnavailable)?;

        match pipe_to_command(&program, &args, text) {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(QuoteError::Share(format!(
                "'{}' exited with {}",
                program, status
            ))),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(QuoteError::ShareUnavailable),
            Err(e) => Err(QuoteError::Share(format!("'{}' failed: {}", program, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_is_unavailable() {
        let sheet = CommandShareSheet::unavailable();
        assert!(matches!(sheet.share("x"), Err(QuoteError::ShareUnavailable)));

        let blank = CommandShareSheet::new(Some("  ".to_string()));
        assert!(matches!(blank.share("x"), Err(QuoteError::ShareUnavailable)));
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let sheet = CommandShareSheet::new(Some("quotable-no-such-share".to_string()));
        assert!(matches!(sheet.share("x"), Err(QuoteError::ShareUnavailable)));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_exit_status() {
        let ok = CommandShareSheet::new(Some("true".to_string()));
        assert!(ok.share("x").is_ok());

        let rejected = CommandShareSheet::new(Some("false".to_string()));
        assert!(matches!(rejected.share("x"), Err(QuoteError::Share(_))));
    }
}
