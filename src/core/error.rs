//! Error types for a merge run
//!
//! Every failure is fatal: the run stops at the first error and nothing is
//! written to the destination.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MergeError>;

#[derive(Error, Debug)]
pub enum MergeError {
    /// Invalid or incomplete command-line input
    #[error("{0}")]
    Config(String),

    /// An input declaration file could not be read
    #[error("Error reading library file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The license header file could not be read
    #[error("Error reading license file {}: {source}", path.display())]
    License {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination file could not be written
    #[error("error writing to file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MergeError {
    pub fn config(message: impl Into<String>) -> Self {
        MergeError::Config(message.into())
    }
}
