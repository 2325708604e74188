mod commands;
mod environment;
mod paths;

pub use commands::{CommandExecutor, HideWindow, PosixShell, PowerShell, native_executor};
pub use environment::Platform;
pub use paths::{AppPaths, AppPathsError};
