mod backend;
mod client;
mod detection;
mod error;

pub use backend::NvmBackend;
pub use client::{NvmClient, nvm_prelude};
pub use detection::detect_nvm_dir;
pub use error::NvmError;

pub use pinode_backend::{BackendError, ToolId, VersionManager};
