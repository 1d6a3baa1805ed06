//! Access to a generated Python package tree.
//!
//! The compiler writes schema-dependent sources whose shape is not known at
//! compile time. Instead of mutating a process-global module search path,
//! each generation run returns a [`GeneratedPackage`]: an explicit handle
//! scoped to that run, keyed by logical (dotted) package path.

use std::path::{Path, PathBuf};

use zserio_util::errors::ZserioError;

/// Handle to one generated package tree.
#[derive(Debug, Clone)]
pub struct GeneratedPackage {
    root: PathBuf,
    api_module: String,
}

impl GeneratedPackage {
    /// Open a generated tree rooted at `gen_dir`.
    ///
    /// Computes the api module path (`api` for a default package, otherwise
    /// `<prefix>.api`) and verifies that it exists on disk; generation that
    /// produced no api module is reported as an error here rather than at
    /// first lookup.
    pub fn open(
        gen_dir: &Path,
        main_zs: &Path,
        is_default_package: bool,
        top_level_package: Option<&str>,
    ) -> Result<Self, ZserioError> {
        let root = gen_dir.canonicalize().map_err(ZserioError::Io)?;
        let api_module = api_module_name(main_zs, is_default_package, top_level_package);

        let package = Self { root, api_module };
        let api = package.api_module.clone();
        package.resolve(&api)?;
        Ok(package)
    }

    /// Absolute root of the generated tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Dotted path of the generated api module (`api` or `<prefix>.api`).
    pub fn api_module(&self) -> &str {
        &self.api_module
    }

    /// On-disk location a logical dotted path would map to, without
    /// checking for existence.
    pub fn module_path(&self, dotted: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in dotted.split('.') {
            path.push(segment);
        }
        path
    }

    /// Resolve a logical dotted path to its generated module on disk.
    ///
    /// A module may be a `<name>.py` file or a package directory containing
    /// `__init__.py`. Fails if neither exists.
    pub fn resolve(&self, dotted: &str) -> Result<PathBuf, ZserioError> {
        let base = self.module_path(dotted);

        let as_file = base.with_extension("py");
        if as_file.is_file() {
            return Ok(as_file);
        }
        if base.join("__init__.py").is_file() {
            return Ok(base);
        }

        Err(ZserioError::Generic {
            message: format!(
                "generated module '{dotted}' not found under {}",
                self.root.display()
            ),
        })
    }
}

/// Compute the dotted api module path for a compiled schema.
///
/// Default package: plain `api`. Otherwise the prefix is the first segment
/// of the top-level package if one was set, else the first path component of
/// the main file name with its extension stripped.
pub fn api_module_name(
    main_zs: &Path,
    is_default_package: bool,
    top_level_package: Option<&str>,
) -> String {
    if is_default_package {
        return "api".to_string();
    }

    let prefix = match top_level_package {
        Some(pkg) => pkg.split('.').next().unwrap_or(pkg).to_string(),
        None => main_zs
            .with_extension("")
            .components()
            .next()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_else(|| "api".to_string()),
    };

    format!("{prefix}.api")
}
