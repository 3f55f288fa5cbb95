//! Merge module - Combine declaration files into one stream
//!
//! Provides:
//! - directive: `/// <reference lib="..." />` recognition
//! - scanner: per-line comment stripping
//! - walker: depth-first inclusion of referenced files
//! - output: line buffer and destination writing

pub mod directive;
pub mod output;
pub mod scanner;
pub mod walker;

use anyhow::Result;

use crate::core::error::MergeError;
use crate::core::file_reader::read_text;
use crate::core::settings::MergeOptions;
use crate::merge::output::write_output;
use crate::merge::walker::{WalkStats, Walker};

/// Summary of a completed merge
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeStats {
    pub walk: WalkStats,
    /// Lines emitted by the walker (license excluded)
    pub lines_emitted: usize,
    /// Size of the final text in bytes
    pub total_bytes: usize,
}

/// Merge all inputs into a single text, fully in memory
pub fn merge(options: &MergeOptions) -> std::result::Result<(String, MergeStats), MergeError> {
    if options.inputs.is_empty() {
        return Err(MergeError::config("no input file specified"));
    }

    let license = match &options.license {
        Some(path) => Some(read_text(path).map_err(|source| MergeError::License {
            path: path.clone(),
            source,
        })?),
        None => None,
    };

    let mut walker = Walker::new(options.settings);
    for input in &options.inputs {
        walker.process(input)?;
    }

    let walk = walker.stats();
    let buffer = walker.into_output();
    let text = buffer.render(license.as_deref());

    let stats = MergeStats {
        walk,
        lines_emitted: buffer.len(),
        total_bytes: text.len(),
    };
    Ok((text, stats))
}

/// Run a merge and deliver the result to its destination
pub fn run_merge(options: MergeOptions) -> Result<()> {
    if options.settings.keep_first_block_comment && !options.settings.strip_comments {
        log::warn!("--keep has no effect without --stripcomm");
    }

    let (text, stats) = merge(&options)?;
    write_output(options.output.as_deref(), &text)?;

    log::info!(
        "Merged {} files ({} lines)",
        stats.walk.files_merged,
        stats.lines_emitted
    );

    if options.stats {
        print_stats(&stats);
    }

    Ok(())
}

fn print_stats(stats: &MergeStats) {
    eprintln!("📦 Merge Statistics:");
    eprintln!("   Files: {}", stats.walk.files_merged);
    eprintln!("   References: {}", stats.walk.references_followed);
    if stats.walk.duplicates_skipped > 0 {
        eprintln!("   Skipped (already included): {}", stats.walk.duplicates_skipped);
    }
    eprintln!("   Lines: {}", stats.lines_emitted);
    eprintln!("   Bytes: {}", stats.total_bytes);
    eprintln!();
}
