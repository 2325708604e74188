use std::path::Path;
use std::sync::Arc;

use log::debug;
use tokio::process::Command;

use pinode_platform::{CommandExecutor, Platform, native_executor};

use crate::error::NvmError;

const NVM: &str = "nvm";

fn single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

/// Shell snippet that exports `NVM_DIR` and loads `nvm.sh` when present.
/// The directory is single-quoted so the shell never expands it.
#[must_use]
pub fn nvm_prelude(nvm_dir: &Path) -> String {
    format!(
        "export NVM_DIR={}; [ -s \"$NVM_DIR/nvm.sh\" ] && \\. \"$NVM_DIR/nvm.sh\"",
        single_quote(&nvm_dir.to_string_lossy())
    )
}

#[derive(Debug, Clone)]
pub struct NvmClient {
    executor: Arc<dyn CommandExecutor>,
}

impl NvmClient {
    #[must_use]
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// Client for the running platform. `nvm_dir` is only used on POSIX,
    /// where nvm is a shell function that has to be sourced first.
    #[must_use]
    pub fn native(nvm_dir: Option<&Path>) -> Self {
        let platform = Platform::current();
        let prelude = if platform.is_windows() {
            None
        } else {
            nvm_dir.map(nvm_prelude)
        };
        Self::new(native_executor(platform, prelude))
    }

    #[must_use]
    pub fn is_windows(&self) -> bool {
        self.executor.platform().is_windows()
    }

    fn build_nvm_command(&self, nvm_args: &[&str]) -> Command {
        self.executor.invoke(NVM, nvm_args)
    }

    /// Check whether `nvm` resolves in the platform shell.
    pub async fn is_installed(&self) -> bool {
        match self.executor.probe(NVM).status().await {
            Ok(status) => {
                debug!("nvm probe exited with {status}");
                status.success()
            }
            Err(e) => {
                debug!("nvm probe could not be spawned: {e}");
                false
            }
        }
    }

    async fn execute(&self, nvm_args: &[&str]) -> Result<(), NvmError> {
        let command = format!("{NVM} {}", nvm_args.join(" "));
        debug!("Running `{command}`");

        let status = self.build_nvm_command(nvm_args).status().await?;

        if status.success() {
            Ok(())
        } else {
            Err(NvmError::CommandFailed {
                command,
                status: status.to_string(),
            })
        }
    }

    /// Install a Node.js version.
    ///
    /// # Errors
    /// Returns an error if `nvm install` cannot be spawned or exits nonzero.
    pub async fn install(&self, version: &str) -> Result<(), NvmError> {
        self.execute(&["install", version]).await
    }

    /// Activate a Node.js version.
    ///
    /// # Errors
    /// Returns an error if `nvm use` cannot be spawned or exits nonzero.
    pub async fn use_version(&self, version: &str) -> Result<(), NvmError> {
        self.execute(&["use", version]).await
    }
}
