use thiserror::Error;

use pinode_backend::{BackendError, ManagedVersionRequest, ToolId};

use crate::cli::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Create,
    Read,
    Update,
}

impl std::fmt::Display for FileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PinError {
    #[error("{reason}: {path:?}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("{tool} is not installed. Please install {tool} and try again.")]
    ManagerUnavailable { tool: ToolId },

    #[error("No version found in {path} file. Please specify a Node.js version.")]
    EmptyVersion { path: String },

    #[error(
        "No {path} file found in the current directory. Please create one with a Node.js version."
    )]
    PinFileMissing { path: String },

    #[error(
        "Failed to {action} {path} file. Make sure you have the necessary permissions. ({kind}: {message})"
    )]
    FileAccess {
        action: FileAction,
        path: String,
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error(
        "Failed to install Node.js with {tool}. Make sure {tool} is installed and the version is valid."
    )]
    DelegateCommand {
        tool: ToolId,
        version: String,
        #[source]
        source: BackendError,
    },
}

impl PinError {
    pub fn file_access(action: FileAction, path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::FileAccess {
            action,
            path: path.into(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Map the result of `operation` to the process exit code.
///
/// A pin file that `use` could not write, or that `auto` found but could not
/// read, is reported but does not fail the process. Every other error exits
/// with 1.
#[must_use]
pub fn exit_code(
    operation: &Operation,
    result: &Result<ManagedVersionRequest, PinError>,
) -> u8 {
    match (operation, result) {
        (_, Ok(_))
        | (
            Operation::Use { .. } | Operation::Auto,
            Err(PinError::FileAccess { .. }),
        ) => 0,
        (_, Err(_)) => 1,
    }
}
