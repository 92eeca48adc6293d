//! Input loading and validation.

use std::{fs, path::Path};

use tracing::warn;

use crate::error::{Error, Result};

/// Content beyond this many characters may be silently truncated by the model.
const OVERSIZE_CHARS: usize = 10_000;

/// Read the input file and return its whitespace-trimmed content.
///
/// Fails when the file is unreadable or empty after trimming. Oversize
/// content is warned about but accepted.
pub fn load_input(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;

    let text = raw.trim();
    if text.is_empty() {
        return Err(Error::EmptyInput { path: path.into() });
    }

    if text.chars().count() > OVERSIZE_CHARS {
        warn!(
            chars = text.chars().count(),
            limit = OVERSIZE_CHARS,
            "input is large; the model may truncate the summary"
        );
    }

    Ok(text.to_string())
}
