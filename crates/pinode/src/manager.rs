use pinode_backend::{ToolId, VersionManager};
use pinode_nvm::NvmBackend;

use crate::settings::Settings;

/// Build the delegate tool selected in `settings` for the running platform.
#[must_use]
pub fn create_manager(settings: &Settings) -> Box<dyn VersionManager> {
    match settings.tool {
        ToolId::Nvm => Box::new(NvmBackend::native(settings.nvm_dir.clone())),
    }
}
