//! Output buffer and destination handling

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::error::{MergeError, Result};

/// Append-only sequence of output lines shared by the whole run
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    lines: Vec<String>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[allow(dead_code)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join the lines with `\n`, prefixed verbatim by `license` when given
    pub fn render(&self, license: Option<&str>) -> String {
        let body = self.lines.join("\n");
        match license {
            Some(header) => {
                let mut text = String::with_capacity(header.len() + body.len());
                text.push_str(header);
                text.push_str(&body);
                text
            }
            None => body,
        }
    }
}

/// Write the merged text to `path` (overwriting) or to stdout
///
/// Stdout gets a trailing newline; files receive the text unchanged.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text).map_err(|source| MergeError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", text)
                .and_then(|_| handle.flush())
                .map_err(|source| MergeError::Write {
                    path: "<stdout>".into(),
                    source,
                })
        }
    }
}
