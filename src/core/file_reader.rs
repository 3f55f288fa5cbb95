//! Reading declaration and license files
//!
//! Files are read whole. Invalid UTF-8 is decoded lossily (replacement
//! characters) with a warning, never rejected.

use std::fs;
use std::path::Path;

/// Read a file as text, lossily decoding non-UTF-8 bytes
pub fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            log::warn!(
                "{} is not valid UTF-8, invalid bytes were replaced",
                path.display()
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Split text into physical lines on `\n` or `\r\n`
///
/// A trailing line break produces a final empty line, so joining the result
/// with `\n` restores the text with normalized line endings.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
