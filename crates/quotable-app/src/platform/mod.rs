//! Host platform capabilities
//!
//! Clipboard and share-sheet implementations backed by external programs.

pub mod clipboard;
pub mod share;

pub use clipboard::SystemClipboard;
pub use share::CommandShareSheet;

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

/// Run `program` with `args`, feeding `text` on stdin
pub(crate) fn pipe_to_command(program: &str, args: &[String], text: &str) -> io::Result<ExitStatus> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Tools that exit without reading stdin close the pipe early
    let written = match child.stdin.take() {
        Some(mut stdin) => match stdin.write_all(text.as_bytes()) {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
            _ => Ok(()),
        },
        None => Ok(()),
    };

    let status = child.wait()?;
    written.map(|()| status)
}

/// Split a command line on whitespace into program and arguments
pub(crate) fn split_command(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        let (program, args) = split_command("xclip -selection clipboard").unwrap();
        assert_eq!(program, "xclip");
        assert_eq!(args, vec!["-selection", "clipboard"]);
    }

    #[test]
    fn test_split_blank_command() {
        assert!(split_command("   ").is_none());
    }
}
