//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::settings::{MergeOptions, Settings};

/// dtsmerge - merge TypeScript declaration files, following lib references.
#[derive(Parser, Debug)]
#[command(name = "dtsmerge")]
#[command(
    author,
    version,
    about,
    arg_required_else_help = true,
    long_about = r#"dtsmerge concatenates TypeScript declaration (.d.ts) files into a single
output, inlining every file named by a `/// <reference lib="..." />` directive
at the point where the directive appears. Each file is included at most once,
so shared references and reference cycles are safe.

Library names are expanded the way the TypeScript compiler names its lib
files: `es2015.core` resolves to `lib.es2015.core.d.ts` next to the file that
references it.

Comment stripping is purely lexical: `//` and `/*` inside string literals are
treated as comments too.

Examples:
    dtsmerge lib.d.ts
    dtsmerge --out merged.d.ts lib.d.ts
    dtsmerge -s -k --info -o lib.merged.d.ts lib.es2015.d.ts
"#
)]
pub struct Cli {
    /// Declaration files to merge, in order.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write output to FILE instead of stdout.
    #[arg(
        short,
        long,
        value_name = "FILE",
        long_help = "Write the merged output to FILE, overwriting it.\n\n\
If omitted, output is written to stdout."
    )]
    pub out: Option<PathBuf>,

    /// Remove comments.
    #[arg(
        short = 's',
        long = "stripcomm",
        long_help = "Remove // line comments and /* */ block comments.\n\n\
Lines that contained only comments are dropped entirely."
    )]
    pub strip_comments: bool,

    /// Keep first block comment (e.g. license header).
    #[arg(
        short,
        long,
        long_help = "Keep the first block comment of the first input file verbatim\n\
(e.g. a license header) while stripping all other comments.\n\n\
Has no effect without --stripcomm."
    )]
    pub keep: bool,

    /// A file containing the license header to be added to the output.
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "DTSMERGE_LICENSE",
        long_help = "Prepend the raw contents of FILE to the merged output.\n\n\
The text is copied verbatim, before anything else."
    )]
    pub license: Option<PathBuf>,

    /// Add "// START OF [file]" and "// END OF [file]" around each included file.
    #[arg(
        short,
        long,
        long_help = "Emit `// START OF <name>` before and `// END OF <name>` after the\n\
contents of every included file. Only the file's base name is used."
    )]
    pub info: bool,

    /// Print merge statistics on stderr.
    #[arg(
        long,
        long_help = "Print merge statistics (files, references, lines, bytes) to stderr."
    )]
    pub stats: bool,

    /// Quiet mode (errors only).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (log every included file).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            strip_comments: self.strip_comments,
            keep_first_block_comment: self.keep,
            emit_info_markers: self.info,
        }
    }

    /// Level override from -q/-v; `None` leaves RUST_LOG in charge
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        if self.quiet {
            Some(log::LevelFilter::Error)
        } else if self.verbose {
            Some(log::LevelFilter::Debug)
        } else {
            None
        }
    }
}

impl From<Cli> for MergeOptions {
    fn from(cli: Cli) -> Self {
        let settings = cli.settings();
        MergeOptions {
            inputs: cli.files,
            license: cli.license,
            output: cli.out,
            settings,
            stats: cli.stats,
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    crate::merge::run_merge(cli.into())
}
