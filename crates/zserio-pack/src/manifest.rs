//! Distribution manifest: the configuration handed to the packaging
//! toolchain after assembly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use zserio_util::errors::ZserioError;

/// File name of the emitted manifest inside the build directory.
pub const MANIFEST_FILE: &str = "dist-manifest.json";

/// Everything the packaging toolchain needs to publish the assembled
/// directory.
#[derive(Debug, Serialize)]
pub struct DistManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub package_dir: PathBuf,
}

impl DistManifest {
    /// Write the manifest as pretty-printed JSON into `build_dir`.
    pub fn write(&self, build_dir: &Path) -> Result<PathBuf, ZserioError> {
        let path = build_dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self).map_err(|e| ZserioError::Generic {
            message: format!("Failed to serialize manifest: {e}"),
        })?;
        fs::write(&path, json).map_err(ZserioError::Io)?;
        Ok(path)
    }
}
