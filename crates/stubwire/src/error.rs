//! Error types for stub loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for stub loading operations.
pub type StubResult<T> = Result<T, StubError>;

/// Errors that can occur while resolving or executing a stub.
///
/// A stub script exiting non-zero is deliberately not represented here: it
/// yields an absent result (`Ok(None)`) from the loader, so callers can treat
/// "the stub declined to produce output" as an ordinary, inspectable outcome.
#[derive(Debug, Error)]
pub enum StubError {
    /// Stub file name does not end in a recognized suffix.
    #[error("stub file {path} has no recognized suffix (expected one of: .json, .py)")]
    UnrecognizedStubKind { path: PathBuf },

    /// Stub file is missing or unreadable.
    #[error("failed to read stub file {path}: {source}")]
    StubNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Interpreter executable could not be launched.
    #[error("failed to launch runtime '{runtime}': {source}. Ensure it is installed and in PATH")]
    ProcessSpawnFailed {
        runtime: String,
        #[source]
        source: std::io::Error,
    },

    /// Input value could not be serialized to JSON.
    #[error("failed to serialize stub input: {0}")]
    InputSerializeFailed(#[source] serde_json::Error),

    /// Stub produced data that is not valid JSON of the expected shape.
    #[error("malformed stub data from {path}: {source}")]
    MalformedStubData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The wait for a stub script was interrupted by the host.
    #[error("interrupted while waiting for stub script to exit")]
    Interrupted,

    /// IO error during stream operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StubError {
    /// Creates a new unrecognized stub kind error.
    pub fn unrecognized(path: impl Into<PathBuf>) -> Self {
        Self::UnrecognizedStubKind { path: path.into() }
    }

    /// Creates a new stub not found error.
    pub fn stub_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StubNotFound {
            path: path.into(),
            source,
        }
    }

    /// Creates a new process spawn failed error.
    pub fn spawn_failed(runtime: impl Into<String>, source: std::io::Error) -> Self {
        Self::ProcessSpawnFailed {
            runtime: runtime.into(),
            source,
        }
    }

    /// Creates a new malformed stub data error.
    pub fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::MalformedStubData {
            path: path.into(),
            source,
        }
    }
}
