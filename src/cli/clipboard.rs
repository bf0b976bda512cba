//! Clipboard writes through the OSC 52 terminal escape sequence
//!
//! The terminal emulator owns the clipboard; we only emit
//! `ESC ] 52 ; c ; <base64> BEL` to a stream it reads.

use std::io::Write;

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use console::Term;

use crate::converter::PLACEHOLDER;

/// Result of a copy request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The text was empty or the placeholder
    NothingToCopy,
}

/// Whether `text` is a real result worth copying
pub fn is_copyable(text: &str) -> bool {
    !text.is_empty() && text != PLACEHOLDER
}

/// Build the OSC 52 sequence that sets the clipboard to `text`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Write a clipboard request for `text` to `writer`
pub fn write_clipboard<W: Write>(writer: &mut W, text: &str) -> Result<CopyOutcome> {
    if !is_copyable(text) {
        return Ok(CopyOutcome::NothingToCopy);
    }

    writer
        .write_all(osc52_sequence(text).as_bytes())
        .context("Failed to write clipboard sequence")?;
    writer.flush().context("Failed to flush clipboard sequence")?;
    Ok(CopyOutcome::Copied)
}

/// Copy `text` via the terminal attached to stderr
pub fn copy_to_clipboard(text: &str) -> Result<CopyOutcome> {
    if !is_copyable(text) {
        return Ok(CopyOutcome::NothingToCopy);
    }

    let mut term = Term::stderr();
    if !term.is_term() {
        bail!("stderr is not a terminal");
    }
    write_clipboard(&mut term, text)
}
