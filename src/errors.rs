//! Error types for treecat.

use std::path::PathBuf;

use crate::output::OutputError;

/// Top-level error type for treecat operations.
#[derive(Debug, thiserror::Error)]
pub enum TreecatError {
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

/// Map an error to its exit code.
pub fn exit_code(error: &TreecatError) -> i32 {
    match error {
        TreecatError::PathNotFound(_) => 3,
        TreecatError::NotADirectory(_) => 4,
        TreecatError::Io(_) => 1,
        TreecatError::Output(_) => 1,
    }
}
