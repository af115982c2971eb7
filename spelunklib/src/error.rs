//! Error types for spelunklib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can stop a scan before it starts.
///
/// Problems with individual files never surface here: a file that vanishes
/// or cannot be decoded is recovered during the walk.
#[derive(Error, Debug)]
pub enum SpelunkError {
    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Root path is a file, not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Encoding name not recognised
    #[error("unsupported encoding '{0}'")]
    UnsupportedEncoding(String),

    /// IO error while inspecting the root
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
