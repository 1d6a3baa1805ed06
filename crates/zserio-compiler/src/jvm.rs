//! Java executable resolution.
//!
//! `JAVA_HOME` takes precedence over the executable search path; when it is
//! set, only its `bin` subdirectory is searched, matching the behaviour of
//! most JVM tooling.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use zserio_util::errors::ZserioError;

#[cfg(windows)]
const JAVA_BINARY: &str = "java.exe";
#[cfg(not(windows))]
const JAVA_BINARY: &str = "java";

/// Locate the Java executable from the process environment.
///
/// Fails with [`ZserioError::JavaNotFound`]; the message states which search
/// strategy was used (`JAVA_HOME` or `PATH`).
pub fn find_java() -> Result<PathBuf, ZserioError> {
    find_java_in(
        std::env::var_os("JAVA_HOME"),
        std::env::var_os("PATH"),
    )
}

/// Pure lookup behind [`find_java`], taking the relevant environment values
/// as arguments.
pub fn find_java_in(
    java_home: Option<OsString>,
    path: Option<OsString>,
) -> Result<PathBuf, ZserioError> {
    if let Some(home) = java_home.filter(|h| !h.is_empty()) {
        let candidate = Path::new(&home).join("bin").join(JAVA_BINARY);
        if is_executable(&candidate) {
            return Ok(candidate);
        }
        return Err(ZserioError::JavaNotFound {
            message: format!(
                "no {JAVA_BINARY} under {} (wrong JAVA_HOME?)",
                Path::new(&home).join("bin").display()
            ),
        });
    }

    if let Some(found) = path.as_ref().and_then(|p| search_path(p)) {
        return Ok(found);
    }

    Err(ZserioError::JavaNotFound {
        message: format!("no {JAVA_BINARY} on PATH and JAVA_HOME is not set"),
    })
}

/// Scan the entries of a `PATH`-style value for the Java binary.
fn search_path(path: &OsString) -> Option<PathBuf> {
    std::env::split_paths(path)
        .map(|dir| dir.join(JAVA_BINARY))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
