//! Reference walker
//!
//! Emits each file's lines in order, splicing in the full contents of every
//! `/// <reference lib="..." />` target at the point where the directive
//! appears. Traversal is depth-first over an explicit stack of open files, so
//! deep reference chains never grow the call stack.
//!
//! Each normalized path is read at most once per walker; later references to
//! it (shared includes or cycles) are no-ops.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::vec;

use crate::core::error::{MergeError, Result};
use crate::core::file_reader::{read_text, split_lines};
use crate::core::paths::{base_name, normalize_path, resolve_reference};
use crate::core::settings::Settings;
use crate::merge::directive::parse_reference_lib;
use crate::merge::output::OutputBuffer;
use crate::merge::scanner::scan_line;

/// Counters collected while walking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Files read and emitted
    pub files_merged: usize,
    /// Directives encountered
    pub references_followed: usize,
    /// Paths skipped because they were already included
    pub duplicates_skipped: usize,
}

/// A file currently being emitted
#[derive(Debug)]
struct FileFrame {
    path: PathBuf,
    lines: vec::IntoIter<String>,
    in_block_comment: bool,
    /// Still offering first-block-comment preservation in this file
    keep_first_block_comment: bool,
}

/// Walk state for one merge run
#[derive(Debug)]
pub struct Walker {
    settings: Settings,
    included: HashSet<PathBuf>,
    first_file_seen: bool,
    output: OutputBuffer,
    stats: WalkStats,
}

impl Walker {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            included: HashSet::new(),
            first_file_seen: false,
            output: OutputBuffer::new(),
            stats: WalkStats::default(),
        }
    }

    /// Emit `path` and everything it references
    ///
    /// Returns immediately if the path was already processed. A file that
    /// cannot be read aborts the walk.
    pub fn process(&mut self, path: &Path) -> Result<()> {
        let mut stack: Vec<FileFrame> = Vec::new();
        if let Some(frame) = self.enter(path)? {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let Some(line) = frame.lines.next() else {
                if let Some(done) = stack.pop() {
                    self.leave(&done);
                }
                continue;
            };

            if let Some(name) = parse_reference_lib(&line) {
                let target = resolve_reference(&frame.path, name);
                log::debug!(
                    "{} references {} -> {}",
                    frame.path.display(),
                    name,
                    target.display()
                );
                self.stats.references_followed += 1;
                if let Some(child) = self.enter(&target)? {
                    stack.push(child);
                }
                continue;
            }

            self.emit_line(frame, line);
        }

        Ok(())
    }

    /// Whether `path` has already been processed in this run
    #[allow(dead_code)]
    pub fn is_included(&self, path: &Path) -> bool {
        self.included.contains(&normalize_path(path))
    }

    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    #[allow(dead_code)]
    pub fn output(&self) -> &OutputBuffer {
        &self.output
    }

    pub fn into_output(self) -> OutputBuffer {
        self.output
    }

    /// Open a file for emission, or `None` if it was already included
    fn enter(&mut self, path: &Path) -> Result<Option<FileFrame>> {
        let path = normalize_path(path);
        if self.included.contains(&path) {
            log::debug!("Skipping already included {}", path.display());
            self.stats.duplicates_skipped += 1;
            return Ok(None);
        }

        let is_first_file = !self.first_file_seen;
        self.first_file_seen = true;
        self.included.insert(path.clone());

        log::debug!("Including {}", path.display());
        let text = read_text(&path).map_err(|source| MergeError::Read {
            path: path.clone(),
            source,
        })?;

        self.output.push("");
        if self.settings.emit_info_markers {
            self.output.push(format!("// START OF {}", base_name(&path)));
        } else {
            self.output.push("");
        }

        Ok(Some(FileFrame {
            lines: split_lines(&text).into_iter(),
            in_block_comment: false,
            keep_first_block_comment: is_first_file
                && self.settings.preserves_first_block_comment(),
            path,
        }))
    }

    fn leave(&mut self, frame: &FileFrame) {
        if self.settings.emit_info_markers {
            self.output.push(format!("// END OF {}", base_name(&frame.path)));
        }
        self.stats.files_merged += 1;
    }

    fn emit_line(&mut self, frame: &mut FileFrame, line: String) {
        if !self.settings.strip_comments {
            self.output.push(line);
            return;
        }

        let outcome = scan_line(&line, frame.in_block_comment, frame.keep_first_block_comment);
        frame.in_block_comment = outcome.in_block_comment;
        if outcome.captured_first_block_comment {
            frame.keep_first_block_comment = false;
        }
        if !outcome.wholly_commented {
            self.output.push(outcome.line);
        }
    }
}
