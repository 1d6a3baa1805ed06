//! Low-level compiler invocation.
//!
//! Builds and runs `<java> -cp <jar> zserio.tools.ZserioTool <args...>` as a
//! direct, blocking subprocess call. No retries, no streaming, no timeout.

use std::path::PathBuf;

use zserio_util::errors::ZserioError;
use zserio_util::process::CommandBuilder;

use crate::{default_jar_path, jvm, ZSERIO_MAIN_CLASS};

/// Result of a single compiler invocation.
///
/// `stdout`/`stderr` are populated only when output capturing was requested.
#[derive(Debug)]
pub struct CompilerOutput {
    pub exit_code: i32,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl CompilerOutput {
    /// Whether the compiler reported success (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Builder for a single compiler run.
pub struct CompilerCommand {
    jar: PathBuf,
    args: Vec<String>,
    capture_output: bool,
    check_exit_code: bool,
}

impl Default for CompilerCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerCommand {
    /// Invocation against the bundled jar (see [`default_jar_path`]).
    pub fn new() -> Self {
        Self::with_jar(default_jar_path())
    }

    /// Invocation against an explicit compiler jar.
    pub fn with_jar(jar: impl Into<PathBuf>) -> Self {
        Self {
            jar: jar.into(),
            args: Vec::new(),
            capture_output: true,
            check_exit_code: false,
        }
    }

    /// Append a single compiler argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple compiler arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Capture stdout/stderr instead of inheriting the terminal (default: true).
    pub fn capture_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }

    /// Raise [`ZserioError::CompilerExit`] on a non-zero exit code
    /// (default: false).
    pub fn check_exit_code(mut self, check: bool) -> Self {
        self.check_exit_code = check;
        self
    }

    /// Run the compiler synchronously and return its outcome.
    pub fn run(&self) -> Result<CompilerOutput, ZserioError> {
        let java = jvm::find_java()?;

        if !self.jar.is_file() {
            return Err(ZserioError::Generic {
                message: format!("compiler jar not found at {}", self.jar.display()),
            });
        }

        let builder = CommandBuilder::new(java.to_string_lossy().to_string())
            .arg("-cp")
            .arg(self.jar.to_string_lossy().to_string())
            .arg(ZSERIO_MAIN_CLASS)
            .args(self.args.iter().cloned());

        tracing::debug!("Running zserio compiler: {:?}", self.args);

        let result = if self.capture_output {
            let output = builder.exec()?;
            CompilerOutput {
                exit_code: output.status.code().unwrap_or(-1),
                stdout: Some(String::from_utf8_lossy(&output.stdout).into_owned()),
                stderr: Some(String::from_utf8_lossy(&output.stderr).into_owned()),
            }
        } else {
            let status = builder.exec_inherit()?;
            CompilerOutput {
                exit_code: status.code().unwrap_or(-1),
                stdout: None,
                stderr: None,
            }
        };

        if self.check_exit_code && !result.success() {
            return Err(ZserioError::CompilerExit {
                code: result.exit_code,
            });
        }

        Ok(result)
    }
}
