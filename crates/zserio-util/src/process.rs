use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, ExitStatus, Output, Stdio};

use crate::errors::ZserioError;

/// Builder for constructing and executing external processes.
///
/// Provides a fluent API for setting program, arguments, environment variables,
/// and working directory. [`exec`](Self::exec) captures stdout/stderr;
/// [`exec_inherit`](Self::exec_inherit) leaves the child attached to the
/// caller's terminal streams.
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    env: HashMap<String, String>,
    cwd: Option<String>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: HashMap::new(),
            cwd: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable for the child process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl Into<String>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Execute the command, capturing stdout and stderr.
    pub fn exec(&self) -> Result<Output, ZserioError> {
        self.command().output().map_err(ZserioError::from)
    }

    /// Execute the command with inherited stdio, blocking until it exits.
    pub fn exec_inherit(&self) -> Result<ExitStatus, ZserioError> {
        self.command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(ZserioError::from)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(Path::new(dir));
        }
        cmd
    }
}
