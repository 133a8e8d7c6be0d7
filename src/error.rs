//! Error types for lesswatch
//!
//! Uses `thiserror` for library errors. Per-file errors (`Read`, `Transform`,
//! `Write`) are reported and skipped by the watch loop; the rest are fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lesswatch operations
pub type LesswatchResult<T> = Result<T, LesswatchError>;

/// Main error type for lesswatch operations
#[derive(Error, Debug)]
pub enum LesswatchError {
    /// Source file could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stylesheet compiler rejected the input
    #[error("failed to compile {path}: {message}")]
    Transform { path: PathBuf, message: String },

    /// Compiled output could not be written
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be read during the startup crawl
    #[error("cannot crawl {path}: {message}")]
    Crawl { path: PathBuf, message: String },

    /// Source directory does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Configuration file failed to parse
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The filesystem watcher could not be started
    #[error("file watcher error: {0}")]
    Watch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<notify::Error> for LesswatchError {
    fn from(err: notify::Error) -> Self {
        LesswatchError::Watch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_transform() {
        let err = LesswatchError::Transform {
            path: PathBuf::from("styles/theme.less"),
            message: "Unrecognised input".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to compile styles/theme.less: Unrecognised input"
        );
    }

    #[test]
    fn test_error_display_directory_not_found() {
        let err = LesswatchError::DirectoryNotFound {
            path: PathBuf::from("missing"),
        };
        assert_eq!(err.to_string(), "directory not found: missing");
    }

    #[test]
    fn test_notify_error_maps_to_watch() {
        let err: LesswatchError = notify::Error::generic("inotify limit reached").into();
        assert!(matches!(err, LesswatchError::Watch(ref m) if m.contains("inotify limit reached")));
    }
}
