mod error;
mod traits;
mod types;

pub use error::BackendError;
pub use traits::VersionManager;
pub use types::{ManagedVersionRequest, ToolId};
