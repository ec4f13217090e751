//! Error types and helpers for user-friendly error messages
//!
//! None of these abort an action. They are printed with a hint and the
//! sequence moves on to its next step.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that happen before an external command reports a status
#[derive(Error, Debug)]
pub enum ExecError {
    /// The command interpreter could not be started
    #[error("Failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The build directory could not be created
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExecError {
    /// Actionable suggestion shown under the error
    pub fn hint(&self) -> Option<String> {
        let source = match self {
            ExecError::Spawn { source, .. } | ExecError::CreateDir { source, .. } => source,
        };
        match (self, source.kind()) {
            (ExecError::Spawn { .. }, io::ErrorKind::NotFound) => Some(
                "Check that the command interpreter is installed and the working directory exists"
                    .to_string(),
            ),
            (_, io::ErrorKind::PermissionDenied) => {
                Some("Check the permissions of the project directory".to_string())
            }
            _ => None,
        }
    }
}
