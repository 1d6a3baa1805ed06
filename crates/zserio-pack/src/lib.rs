//! Packaging pipeline for the zserio distribution.
//!
//! Fetches the latest compiler release, merges the extracted runtime library
//! with the local source tree, derives the package description, and hands
//! the assembled directory to the packaging toolchain via a distribution
//! manifest.

pub mod assemble;
pub mod config;
pub mod description;
pub mod fetch;
pub mod manifest;

/// Name of the assembled package directory inside the build directory.
pub const PACKAGE_NAME: &str = "zserio";

/// Initializer file merged from the runtime and local trees.
pub const INIT_FILE: &str = "__init__.py";

/// Compiler jar file name inside the extracted compiler bundle.
pub const JAR_FILE: &str = "zserio.jar";

/// Subdirectory of the build directory holding downloaded/extracted assets.
pub const DOWNLOAD_SUBDIR: &str = "download";

/// Location of the Python runtime inside the extracted runtime bundle.
pub const RUNTIME_SUBTREE: &[&str] = &["runtime_libs", "python", "zserio"];
