//! Crate-level error type and `Result` alias for the launcher.
//! Covers the two fatal conditions of delegation (missing installer script and
//! failure to start the interpreter) plus plain I/O failures around them.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("install.sh not found in package")]
    MissingDependency { path: PathBuf },

    #[error("Failed to run install.sh: {source}")]
    SpawnFailure {
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Every launcher error is terminal and maps to status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
