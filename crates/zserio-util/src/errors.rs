use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all zserio-dist operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ZserioError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Release index lookup failed (unreachable, empty, or malformed).
    #[error("Release lookup failed: {message}")]
    #[diagnostic(help("Check network connectivity and the release index URL"))]
    Release { message: String },

    /// Network request or download failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Archive extraction failed (corrupt archive, bad entry).
    #[error("Extraction failed: {message}")]
    Extract { message: String },

    /// No usable Java executable was found.
    ///
    /// The message states which search strategy failed (`JAVA_HOME` or `PATH`).
    #[error("Java not found: {message}")]
    #[diagnostic(help("Install a JRE or point JAVA_HOME at a Java installation"))]
    JavaNotFound { message: String },

    /// The zserio compiler exited with a non-zero code.
    #[error("zserio compiler exited with code {code}")]
    CompilerExit { code: i32 },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ZserioResult<T> = miette::Result<T>;
