//! Run-wide settings, fixed once the command line has been parsed.

use std::path::PathBuf;

/// Switches that shape how each file's lines are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Route every non-directive line through the comment scanner
    pub strip_comments: bool,

    /// Keep the first block comment of the first file verbatim
    /// (only meaningful together with `strip_comments`)
    pub keep_first_block_comment: bool,

    /// Bracket each file with `// START OF` / `// END OF` markers
    pub emit_info_markers: bool,
}

impl Settings {
    /// Whether first-block-comment preservation can take effect at all
    pub fn preserves_first_block_comment(&self) -> bool {
        self.strip_comments && self.keep_first_block_comment
    }
}

/// Everything the driver needs for one merge run
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Top-level input files, merged in this order
    pub inputs: Vec<PathBuf>,

    /// File whose raw contents are prepended to the output
    pub license: Option<PathBuf>,

    /// Destination file; stdout when absent
    pub output: Option<PathBuf>,

    pub settings: Settings,

    /// Print merge statistics to stderr
    pub stats: bool,
}
