//! Error types for icon generation and packaging operations.
//!
//! Provides contextual error chaining, filesystem-specific errors, and
//! variants for external tool failures.
//!
//! # Features
//!
//! - **Context trait**: Add context to errors similar to anyhow
//! - **ErrorExt trait**: Filesystem operations with automatic path context
//! - **bail! macro**: Early return with formatted error messages

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as DeriveError;

/// Errors returned by flutterpack.
///
/// Covers all error conditions across both pipelines: I/O errors, image
/// decoding/encoding errors, external tool failures, and project layout
/// problems. All of them are fatal; `main` prints the message and exits
/// with a non-zero status.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Error with context. Created by the [`Context`] trait.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Context describing the operation (e.g., "reading source image")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Child process failed to spawn.
    #[error("failed to run command {command}: {error}")]
    CommandFailed {
        /// Command that failed to execute
        command: String,
        /// The underlying error
        error: io::Error,
    },

    /// External tool exited with a non-zero status.
    #[error("{tool} failed: {stderr}")]
    ToolFailed {
        /// Tool name (e.g., "create-dmg")
        tool: &'static str,
        /// Captured standard error output
        stderr: String,
    },

    /// External tool is not installed or not on PATH.
    #[error("required tool '{tool}' not found on PATH: {error}")]
    ToolNotFound {
        /// Tool name
        tool: &'static str,
        /// The underlying lookup error
        error: which::Error,
    },

    /// Source image path does not exist.
    #[error("source image not found: {0}")]
    SourceNotFound(PathBuf),

    /// Project root could not be detected from the current directory.
    #[error(
        "cannot detect a Flutter project here: no android/, ios/, or macos/ directory found"
    )]
    ProjectNotDetected,

    /// Explicit project path contained none of the platform directories.
    #[error("no platform resource directories found under {0}")]
    NoPlatformsFound(PathBuf),

    /// Path given to the packaging pipeline is not a .app bundle.
    #[error("not a .app bundle: {0}")]
    NotAnAppBundle(PathBuf),

    /// No .app bundle found in the build output directory.
    #[error("no .app bundle found under {0}")]
    AppBundleNotFound(PathBuf),

    /// Generic I/O error.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Image processing error (decoding, resizing, encoding).
    #[error("{0}")]
    ImageError(#[from] image::ImageError),

    /// JSON serialization error (manifest writing).
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error with custom message.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Get actionable recovery suggestions for this error.
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Error::ToolNotFound { tool, .. } => match *tool {
                "create-dmg" => vec![
                    "Install create-dmg: brew install create-dmg".to_string(),
                ],
                "flutter" => vec![
                    "Install the Flutter SDK and ensure 'flutter' is on PATH".to_string(),
                ],
                _ => vec![format!("Install '{tool}' and ensure it is on PATH")],
            },
            Error::ProjectNotDetected => vec![
                "Run from a Flutter project root, or pass the project path explicitly"
                    .to_string(),
            ],
            Error::NotAnAppBundle(_) => vec![
                "Pass the path to a built .app bundle, e.g. build/macos/Build/Products/Release/MyApp.app"
                    .to_string(),
            ],
            Error::AppBundleNotFound(_) => vec![
                "Build the app first: flutter build macos --release".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for adding context to errors.
///
/// Similar to `anyhow::Context` but integrated with flutterpack's Error type.
/// Works with both `Result<T>` and `Option<T>`.
pub trait Context<T> {
    /// Add context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Add context to an error using a closure (lazy evaluation).
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context(f().to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Extension trait for filesystem operations with automatic path context.
///
/// Wraps I/O errors with the path that caused them for better diagnostics.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the
    /// operation, e.g., "reading file", "creating directory".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Convert a path into a UTF-8 string, failing on non-UTF-8 paths.
///
/// External tools receive paths as plain argv strings, so a lossy
/// conversion would silently target the wrong file.
pub fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        Error::GenericError(format!(
            "path contains non-UTF8 characters: {}",
            path.display()
        ))
    })
}

/// Macro for early return with error.
///
/// Converts the message into a [`Error::GenericError`] and returns immediately.
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::Error::GenericError($msg.into()))
    };
    ($err:expr $(,)?) => {
        return Err($crate::error::Error::GenericError($err.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::GenericError(format!($fmt, $($arg)*)))
    };
}
