//! dtsmerge - Merge TypeScript declaration files into one output
//!
//! dtsmerge provides:
//! - Recursive inlining of `/// <reference lib="..." />` targets
//! - Duplicate and cycle suppression
//! - Optional comment stripping with first-block-comment preservation
//! - Optional license header and per-file info markers

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod merge;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }
    builder.target(env_logger::Target::Stderr).init();

    cli::run(cli)
}
