use async_trait::async_trait;
use log::{debug, info};
use std::path::PathBuf;

use pinode_backend::{BackendError, ToolId, VersionManager};

use crate::client::NvmClient;
use crate::detection::detect_nvm_dir;

#[derive(Debug, Clone)]
pub struct NvmBackend {
    client: NvmClient,
}

impl NvmBackend {
    #[must_use]
    pub fn new(client: NvmClient) -> Self {
        Self { client }
    }

    /// Backend for the running platform. A configured `nvm_dir` takes
    /// precedence over the detected one.
    #[must_use]
    pub fn native(nvm_dir: Option<PathBuf>) -> Self {
        let nvm_dir = nvm_dir.or_else(detect_nvm_dir);
        match &nvm_dir {
            Some(dir) => debug!("nvm: using NVM_DIR {}", dir.display()),
            None => debug!("nvm: no NVM_DIR found, relying on PATH"),
        }
        Self::new(NvmClient::native(nvm_dir.as_deref()))
    }

    #[must_use]
    pub fn client(&self) -> &NvmClient {
        &self.client
    }
}

#[async_trait]
impl VersionManager for NvmBackend {
    fn tool(&self) -> ToolId {
        ToolId::Nvm
    }

    async fn is_available(&self) -> bool {
        info!("Checking if nvm is installed...");
        let available = self.client.is_installed().await;
        debug!("nvm: available = {available}");
        available
    }

    async fn install(&self, version: &str) -> Result<(), BackendError> {
        debug!("nvm: installing version {version}");
        self.client.install(version).await.map_err(Into::into)
    }

    async fn use_version(&self, version: &str) -> Result<(), BackendError> {
        debug!("nvm: using version {version}");
        self.client.use_version(version).await.map_err(Into::into)
    }
}
