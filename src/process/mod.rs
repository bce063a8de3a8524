use std::io;

use thiserror::Error;

pub mod executor;
pub mod signal;

pub use executor::{substitute, Launcher};
pub use signal::InterruptFlag;

/// Status reported for a program that could not be found.
pub const STATUS_NOT_FOUND: i32 = 127;
/// Status reported for a program that was found but could not be executed.
pub const STATUS_NOT_EXECUTABLE: i32 = 126;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("{0}: command not found")]
    ProgramNotFound(String),
    #[error("{0}: permission denied")]
    PermissionDenied(String),
    #[error("{program}: cannot spawn process: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program}: failed waiting for process: {source}")]
    WaitFailed {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub(crate) fn from_spawn(program: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => LaunchError::ProgramNotFound(program.to_string()),
            io::ErrorKind::PermissionDenied => LaunchError::PermissionDenied(program.to_string()),
            _ => LaunchError::SpawnFailed {
                program: program.to_string(),
                source: err,
            },
        }
    }

    /// The status a POSIX shell would report for this failure.
    pub fn status(&self) -> i32 {
        match self {
            LaunchError::ProgramNotFound(_) => STATUS_NOT_FOUND,
            LaunchError::PermissionDenied(_) => STATUS_NOT_EXECUTABLE,
            LaunchError::SpawnFailed { .. } | LaunchError::WaitFailed { .. } => 1,
        }
    }
}
