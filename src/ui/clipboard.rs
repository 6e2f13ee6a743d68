use std::io;

use anyhow::{Context, Result};
use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;

/// Write-only access to the system clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with `value`, verbatim.
    fn copy(&mut self, value: &str) -> Result<()>;
}

/// Sets the clipboard through an OSC 52 escape sequence. The terminal
/// emulator forwards it to the host clipboard, which also works over SSH.
#[derive(Debug, Default)]
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn copy(&mut self, value: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, CopyToClipboard::to_clipboard_from(value))
            .context("failed to write to clipboard")
    }
}
