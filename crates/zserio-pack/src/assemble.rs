//! Package assembly: merge the extracted runtime tree with the local source
//! tree into the publishable package directory.
//!
//! Operates purely on the filesystem below the build directory; the download
//! step must have run (or its layout been provided) beforehand.

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use zserio_util::errors::ZserioError;
use zserio_util::fs::{copy_tree, ensure_dir};

use crate::config::PackConfig;
use crate::{INIT_FILE, JAR_FILE};

/// Assemble the package directory and return its path.
///
/// Steps, in order:
/// 1. copy the extracted runtime subtree into the package directory,
///    overwriting existing files;
/// 2. place the compiler jar at `compiler/zserio.jar` inside the package;
/// 3. copy the local source tree in, excluding its initializer;
/// 4. append the local initializer to the runtime's, separated by a blank
///    line, so local definitions extend runtime-level symbols.
pub fn assemble(config: &PackConfig) -> Result<PathBuf, ZserioError> {
    let package_dir = config.package_dir();

    let runtime_dir = config.runtime_dir();
    if !runtime_dir.is_dir() {
        return Err(ZserioError::Extract {
            message: format!(
                "extracted runtime not found at {} (did the download step run?)",
                runtime_dir.display()
            ),
        });
    }
    copy_tree(&runtime_dir, &package_dir, &[]).map_err(ZserioError::Io)?;

    let compiler_dir = package_dir.join("compiler");
    ensure_dir(&compiler_dir).map_err(ZserioError::Io)?;
    fs::copy(
        config.download_dir().join(JAR_FILE),
        compiler_dir.join(JAR_FILE),
    )
    .map_err(ZserioError::Io)?;

    copy_tree(&config.src_dir, &package_dir, &[INIT_FILE]).map_err(ZserioError::Io)?;

    append_initializer(config, &package_dir)?;

    Ok(package_dir)
}

/// Append the local initializer's contents to the runtime's initializer.
///
/// Invariant: runtime content first, then a blank line, then the local
/// content; the local copy never replaces the runtime's file.
fn append_initializer(config: &PackConfig, package_dir: &std::path::Path) -> Result<(), ZserioError> {
    let local_init = fs::read_to_string(config.local_init_file()).map_err(ZserioError::Io)?;

    let mut runtime_init = OpenOptions::new()
        .create(true)
        .append(true)
        .open(package_dir.join(INIT_FILE))
        .map_err(ZserioError::Io)?;
    runtime_init.write_all(b"\n").map_err(ZserioError::Io)?;
    runtime_init
        .write_all(local_init.as_bytes())
        .map_err(ZserioError::Io)?;

    Ok(())
}
