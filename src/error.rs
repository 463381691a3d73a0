//! Error types for loading and saving startup scripts

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`ShellConfig`](crate::ShellConfig) operations.
///
/// A missing script on load is not an error; it yields an empty model.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The script is not valid UTF-8; `line` is where the first bad byte is.
    #[error("{} is not valid UTF-8 (line {line})", path.display())]
    NotUtf8 { path: PathBuf, line: usize },

    #[error("failed to write temp file {}: {source}", path.display())]
    WriteTemp {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The final rename failed; the previous content was moved back.
    #[error("failed to save {}: {source} (previous content restored)", path.display())]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The final rename failed and the backup could not be moved back.
    #[error("failed to save {}: {source}; restoring backup also failed: {restore}", path.display())]
    ReplaceUnrecovered {
        path: PathBuf,
        #[source]
        source: io::Error,
        restore: io::Error,
    },

    #[error("failed to read backup {}: {source}", path.display())]
    ReadBackup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {}: {message}", path.display())]
    Settings { path: PathBuf, message: String },
}

impl ConfigError {
    /// True when a failed save left the previous file content in place.
    pub fn original_intact(&self) -> bool {
        matches!(
            self,
            ConfigError::WriteTemp { .. } | ConfigError::Replace { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
