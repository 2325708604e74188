use thiserror::Error;

use pinode_backend::BackendError;

#[derive(Error, Debug, Clone)]
pub enum NvmError {
    #[error("Command `{command}` failed with {status}")]
    CommandFailed { command: String, status: String },

    #[error("IO error: {message}")]
    IoError {
        kind: std::io::ErrorKind,
        message: String,
    },
}

impl From<std::io::Error> for NvmError {
    fn from(err: std::io::Error) -> Self {
        NvmError::IoError {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<NvmError> for BackendError {
    fn from(err: NvmError) -> Self {
        match err {
            NvmError::CommandFailed { command, status } => {
                BackendError::CommandFailed { command, status }
            }
            NvmError::IoError { kind, message } => BackendError::IoError { kind, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use pinode_backend::BackendError;

    use super::NvmError;

    #[test]
    fn io_error_conversion_maps_to_io_variant() {
        let mapped = NvmError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "sh: not found",
        ));
        assert!(matches!(
            mapped,
            NvmError::IoError { kind: std::io::ErrorKind::NotFound, ref message } if message.contains("sh: not found")
        ));
    }

    #[test]
    fn command_failure_converts_into_backend_error() {
        let error = NvmError::CommandFailed {
            command: "nvm use 20.0.0".to_string(),
            status: "exit status: 3".to_string(),
        };

        assert_eq!(
            BackendError::from(error),
            BackendError::CommandFailed {
                command: "nvm use 20.0.0".to_string(),
                status: "exit status: 3".to_string(),
            }
        );
    }
}
