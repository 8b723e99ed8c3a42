/// Error types shared by the sorting and factorization engines.
///
/// Filesystem failures carry the path that caused them so a log line alone
/// is enough to locate the problem. Only [`DeclutterError::SelfCheck`] is
/// meant to be fatal; callers log and skip everything else.
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, DeclutterError>;

#[derive(Debug, Error)]
pub enum DeclutterError {
    /// Reading, creating, moving or removing `path` failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The move target already exists; files are never overwritten.
    #[error("destination {0} already exists")]
    DestinationExists(PathBuf),

    /// A factorization mode other than `linear` or `parallel` was requested.
    #[error("invalid mode {0:?}, expected 'linear' or 'parallel'")]
    InvalidMode(String),

    /// A computed divisor list did not match the expected one.
    #[error("factorization error for number {number}")]
    SelfCheck { number: u64 },

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DeclutterError {
    /// Wrap an `io::Error` together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error should terminate the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SelfCheck { .. })
    }
}
