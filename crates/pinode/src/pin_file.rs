use log::{info, warn};
use std::path::Path;

use crate::error::{FileAction, PinError};

pub const DEFAULT_PIN_FILE: &str = ".nvmrc";

/// Path of the pin file. Always non-empty and contains a `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinPath(String);

impl PinPath {
    /// Validate a pin file path without touching the filesystem.
    ///
    /// # Errors
    /// Returns [`PinError::InvalidPath`] when `path` is empty or has no `.`.
    pub fn parse(path: impl Into<String>) -> Result<Self, PinError> {
        let path = path.into();
        if path.is_empty() {
            return Err(PinError::InvalidPath {
                path,
                reason: "File path is required",
            });
        }
        if !path.contains('.') {
            return Err(PinError::InvalidPath {
                path,
                reason: "Invalid file path",
            });
        }
        Ok(Self(path))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl Default for PinPath {
    fn default() -> Self {
        Self(DEFAULT_PIN_FILE.to_string())
    }
}

impl std::fmt::Display for PinPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reads and writes the pinned version. Versions are always written with a
/// `v` prefix, even when the caller already supplied one.
#[derive(Debug, Clone, Default)]
pub struct PinFile {
    path: PinPath,
}

impl PinFile {
    #[must_use]
    pub fn new(path: PinPath) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &PinPath {
        &self.path
    }

    /// Replace the pin path. The current path is kept when `path` is invalid.
    ///
    /// # Errors
    /// Returns [`PinError::InvalidPath`] when `path` is empty or has no `.`.
    pub fn set_path(&mut self, path: &str) -> Result<(), PinError> {
        self.path = PinPath::parse(path)?;
        Ok(())
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.as_path().exists()
    }

    fn contents(version: &str) -> String {
        format!("v{version}")
    }

    fn read_trimmed(&self) -> Result<String, std::io::Error> {
        std::fs::read_to_string(self.path.as_path()).map(|content| content.trim().to_string())
    }

    /// Create the pin file with `version` if it is missing, then return its
    /// trimmed content. The content may be empty.
    ///
    /// # Errors
    /// Returns [`PinError::FileAccess`] when the file cannot be created or read.
    pub fn ensure(&self, version: &str) -> Result<String, PinError> {
        let path = &self.path;
        if !self.exists() {
            warn!("{path} file not found. Creating one with version {version}...");
            std::fs::write(path.as_path(), Self::contents(version))
                .map_err(|e| PinError::file_access(FileAction::Create, path.as_str(), &e))?;
            info!("✔ Created {path} file with version {version}.");
        }

        self.read_trimmed()
            .map_err(|e| PinError::file_access(FileAction::Read, path.as_str(), &e))
    }

    /// Read the pinned version.
    ///
    /// # Errors
    /// Returns [`PinError::PinFileMissing`] when the file does not exist,
    /// [`PinError::EmptyVersion`] when it is blank and
    /// [`PinError::FileAccess`] on any other I/O failure.
    pub fn read_version(&self) -> Result<String, PinError> {
        let path = self.path.as_str();
        let version = self.read_trimmed().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PinError::PinFileMissing {
                    path: path.to_string(),
                }
            } else {
                PinError::file_access(FileAction::Read, path, &e)
            }
        })?;

        if version.is_empty() {
            return Err(PinError::EmptyVersion {
                path: path.to_string(),
            });
        }
        Ok(version)
    }

    /// Overwrite the pin file with `version`.
    ///
    /// # Errors
    /// Returns [`PinError::FileAccess`] when the file cannot be written.
    pub fn write_version(&self, version: &str) -> Result<(), PinError> {
        let path = &self.path;
        std::fs::write(path.as_path(), Self::contents(version))
            .map_err(|e| PinError::file_access(FileAction::Update, path.as_str(), &e))?;
        info!("✔ Updated {path} file with version {version}.");
        Ok(())
    }
}
