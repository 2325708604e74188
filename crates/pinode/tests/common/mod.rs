use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pinode::{BackendError, PinFile, PinPath, ToolId, VersionManager, VersionPinController};
use tempfile::TempDir;

/// Records every delegate call instead of spawning a process.
#[derive(Clone, Default)]
pub struct RecordingManager {
    pub available: bool,
    pub fail_install: bool,
    pub probes: Arc<Mutex<usize>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingManager {
    pub fn available() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn probes(&self) -> usize {
        *self.probes.lock().expect("probes lock")
    }
}

#[async_trait]
impl VersionManager for RecordingManager {
    fn tool(&self) -> ToolId {
        ToolId::Nvm
    }

    async fn is_available(&self) -> bool {
        *self.probes.lock().expect("probes lock") += 1;
        self.available
    }

    async fn install(&self, version: &str) -> Result<(), BackendError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(format!("install {version}"));
        if self.fail_install {
            return Err(BackendError::command_failed(
                format!("nvm install {version}"),
                "exit status: 1",
            ));
        }
        Ok(())
    }

    async fn use_version(&self, version: &str) -> Result<(), BackendError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(format!("use {version}"));
        Ok(())
    }
}

pub struct Project {
    pub dir: TempDir,
    pub controller: VersionPinController,
}

impl Project {
    pub fn new(manager: &RecordingManager) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(".nvmrc").to_string_lossy().into_owned();
        let pin = PinFile::new(PinPath::parse(path).expect("valid pin path"));
        Self {
            dir,
            controller: VersionPinController::new(pin, Box::new(manager.clone())),
        }
    }

    pub fn nvmrc(&self) -> std::path::PathBuf {
        self.dir.path().join(".nvmrc")
    }

    pub fn read_nvmrc(&self) -> String {
        std::fs::read_to_string(self.nvmrc()).expect("read .nvmrc")
    }
}
