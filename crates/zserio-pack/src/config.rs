//! Packaging run configuration.

use std::path::{Path, PathBuf};

use crate::{DOWNLOAD_SUBDIR, PACKAGE_NAME};

/// Environment variable overriding the build output directory.
pub const BUILD_DIR_ENV_VAR: &str = "ZSERIO_BUILD_DIR";

/// Configuration of a single packaging run.
///
/// All paths are resolved relative to nothing; callers pass them absolute or
/// relative to their own working directory.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Project root containing the local source tree and README.
    pub root_dir: PathBuf,
    /// Build output directory; everything the run writes lands below it.
    pub build_dir: PathBuf,
    /// Release index endpoint.
    pub index_url: String,
    /// Local source tree merged into the package.
    pub src_dir: PathBuf,
    /// Documentation file the long description is sliced from.
    pub readme: PathBuf,
    /// Published package name.
    pub name: String,
}

impl PackConfig {
    /// Defaults for a project rooted at `root_dir`.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        let root_dir = root_dir.into();
        Self {
            build_dir: root_dir.join("build"),
            index_url: zserio_fetch::DEFAULT_INDEX_URL.to_string(),
            src_dir: root_dir.join("src").join(PACKAGE_NAME),
            readme: root_dir.join("README.md"),
            name: PACKAGE_NAME.to_string(),
            root_dir,
        }
    }

    /// Directory downloaded assets are extracted into.
    pub fn download_dir(&self) -> PathBuf {
        self.build_dir.join(DOWNLOAD_SUBDIR)
    }

    /// Directory the merged package is assembled into.
    pub fn package_dir(&self) -> PathBuf {
        self.build_dir.join(&self.name)
    }

    /// Path of the extracted runtime's package subtree.
    pub fn runtime_dir(&self) -> PathBuf {
        let mut dir = self.download_dir();
        for segment in crate::RUNTIME_SUBTREE {
            dir.push(segment);
        }
        dir
    }

    /// Path of the local initializer file.
    pub fn local_init_file(&self) -> PathBuf {
        self.src_dir.join(crate::INIT_FILE)
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self::new(Path::new("."))
    }
}
