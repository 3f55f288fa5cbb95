//! Core module - Shared building blocks for a merge run
//!
//! This module provides:
//! - Error types
//! - Run settings
//! - Path normalization and reference resolution
//! - File reading

pub mod error;
pub mod file_reader;
pub mod paths;
pub mod settings;
