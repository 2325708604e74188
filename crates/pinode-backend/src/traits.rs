use async_trait::async_trait;

use crate::error::BackendError;
use crate::types::ToolId;

/// A delegate tool that installs and activates Node.js versions.
#[async_trait]
pub trait VersionManager: Send + Sync {
    fn tool(&self) -> ToolId;

    fn name(&self) -> &'static str {
        self.tool().as_str()
    }

    /// Single existence check for the tool. Any failure counts as unavailable.
    async fn is_available(&self) -> bool;

    async fn install(&self, version: &str) -> Result<(), BackendError>;

    async fn use_version(&self, version: &str) -> Result<(), BackendError>;
}
