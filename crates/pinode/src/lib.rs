pub mod cli;
pub mod controller;
pub mod error;
pub mod logging;
pub mod manager;
pub mod pin_file;
pub mod settings;

pub use cli::{Cli, Operation};
pub use controller::VersionPinController;
pub use error::{FileAction, PinError, exit_code};
pub use pin_file::{DEFAULT_PIN_FILE, PinFile, PinPath};
pub use settings::{Settings, SettingsError};

pub use pinode_backend::{BackendError, ManagedVersionRequest, ToolId, VersionManager};
