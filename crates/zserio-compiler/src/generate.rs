//! High-level Python source generation.
//!
//! Wraps the low-level invocation with the output directory conventions and
//! command-line assembly of the compiler, and returns the generated tree as
//! a [`GeneratedPackage`] handle.

use std::path::{Path, PathBuf};

use zserio_util::errors::ZserioError;

use crate::invoke::CompilerCommand;
use crate::package::GeneratedPackage;
use crate::DEFAULT_GEN_DIR_NAME;

/// Options for [`generate_python`].
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// The main source file is a default package (no enclosing namespace).
    pub is_default_package: bool,
    /// Source file directory (`-src` command line option).
    pub src_dir: Option<PathBuf>,
    /// Directory where to generate Python sources (`-python` option).
    pub gen_dir: Option<PathBuf>,
    /// Top-level package for compilation (`-setTopLevelPackage` option).
    pub top_level_package: Option<String>,
    /// Extra command line options, passed through verbatim and unvalidated.
    pub extra_args: Vec<String>,
}

/// Generate Python sources by running the zserio compiler.
///
/// When no output directory is given, sources are generated into
/// `.zserio_python_package` under the source directory, or under the main
/// file's directory if no source directory is given either.
///
/// A non-zero compiler exit propagates as [`ZserioError::CompilerExit`]; on
/// success the generated tree is opened and returned as a
/// [`GeneratedPackage`].
pub fn generate_python(
    main_zs: &Path,
    options: &GenerateOptions,
) -> Result<GeneratedPackage, ZserioError> {
    let python_dir = output_dir_for(
        main_zs,
        options.src_dir.as_deref(),
        options.gen_dir.as_deref(),
    );
    let args = compile_args(main_zs, options, &python_dir);

    CompilerCommand::new()
        .args(args)
        .check_exit_code(true)
        .run()?;

    GeneratedPackage::open(
        &python_dir,
        main_zs,
        options.is_default_package,
        options.top_level_package.as_deref(),
    )
}

/// Compute the effective output directory for generated sources.
pub fn output_dir_for(main_zs: &Path, src_dir: Option<&Path>, gen_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = gen_dir {
        return dir.to_path_buf();
    }
    if let Some(dir) = src_dir {
        return dir.join(DEFAULT_GEN_DIR_NAME);
    }
    let main_dir = main_zs.parent().unwrap_or_else(|| Path::new("."));
    main_dir.join(DEFAULT_GEN_DIR_NAME)
}

/// Assemble the compiler command line for a generation run.
///
/// Order: main file, optional `-src <dir>`, `-python <out>`, optional
/// `-setTopLevelPackage <pkg>`, extra arguments verbatim.
pub fn compile_args(main_zs: &Path, options: &GenerateOptions, python_dir: &Path) -> Vec<String> {
    let mut args = vec![main_zs.to_string_lossy().into_owned()];

    if let Some(src_dir) = &options.src_dir {
        args.push("-src".to_string());
        args.push(src_dir.to_string_lossy().into_owned());
    }

    args.push("-python".to_string());
    args.push(python_dir.to_string_lossy().into_owned());

    if let Some(pkg) = &options.top_level_package {
        args.push("-setTopLevelPackage".to_string());
        args.push(pkg.clone());
    }

    args.extend(options.extra_args.iter().cloned());
    args
}
