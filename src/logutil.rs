//! Player input as it appears in log records.

use std::fmt;

/// Characters of player input kept in a log preview.
const PREVIEW_CHARS: usize = 80;

/// Lazily formatted, single-line preview of raw player input.
///
/// Control characters, quotes and backslashes are written with Rust's debug
/// escapes; input longer than [`PREVIEW_CHARS`] ends in `…`.
pub struct InputPreview<'a>(&'a str);

pub fn preview_input(raw: &str) -> InputPreview<'_> {
    InputPreview(raw)
}

impl fmt::Display for InputPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.0.chars();
        for ch in chars.by_ref().take(PREVIEW_CHARS) {
            write!(f, "{}", ch.escape_debug())?;
        }
        if chars.next().is_some() {
            f.write_str("…")?;
        }
        Ok(())
    }
}
