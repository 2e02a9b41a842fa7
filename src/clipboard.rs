//! System clipboard as the selection source and replacement sink.

use arboard::Clipboard;

use crate::error::Result;

/// Read the current clipboard text.
pub fn read_selection() -> Result<String> {
    let mut clipboard = Clipboard::new()?;
    let text = clipboard.get_text()?;
    tracing::debug!("Read {} bytes from clipboard", text.len());
    Ok(text)
}

/// Replace the clipboard contents with `replacement`.
pub fn write_replacement(replacement: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(replacement.to_string())?;
    Ok(())
}
