//! Shared utilities for the zserio distribution tooling.
//!
//! This crate provides cross-cutting concerns used by all other zserio-dist
//! crates: error types, filesystem helpers, process spawning, and terminal
//! progress indicators.

use std::path::{Path, PathBuf};

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;

/// Returns the path to the zserio data directory (`~/.zserio/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".zserio")
}
