//! Invocation layer for the bundled zserio compiler.
//!
//! The compiler itself is an opaque jar run on a JVM; this crate locates a
//! Java executable, builds and runs the compiler command line, and exposes
//! generated output through an explicit [`package::GeneratedPackage`] handle.

use std::path::PathBuf;

pub mod generate;
pub mod invoke;
pub mod jvm;
pub mod package;

/// Entry class of the compiler inside the bundled jar.
pub const ZSERIO_MAIN_CLASS: &str = "zserio.tools.ZserioTool";

/// Directory name used for generated sources when no explicit output
/// directory is given.
pub const DEFAULT_GEN_DIR_NAME: &str = ".zserio_python_package";

/// Environment variable overriding the bundled jar location.
pub const JAR_ENV_VAR: &str = "ZSERIO_JAR";

/// Resolve the bundled compiler jar path.
///
/// `ZSERIO_JAR` wins when set; otherwise the jar is expected at the fixed
/// relative path inside the zserio data directory,
/// `~/.zserio/compiler/zserio.jar`.
pub fn default_jar_path() -> PathBuf {
    match std::env::var_os(JAR_ENV_VAR) {
        Some(path) => PathBuf::from(path),
        None => zserio_util::dirs_path().join("compiler").join("zserio.jar"),
    }
}
