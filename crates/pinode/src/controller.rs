use log::{debug, error, info};

use pinode_backend::{ManagedVersionRequest, ToolId, VersionManager};

use crate::cli::Operation;
use crate::error::PinError;
use crate::pin_file::PinFile;

fn success_banner(tool: ToolId) -> String {
    format!("\n🎉 Node.js Version Managed Successfully with {tool}!")
}

/// Sequences the probe, the pin file and the delegate tool for each command.
pub struct VersionPinController {
    pin_file: PinFile,
    manager: Box<dyn VersionManager>,
}

impl VersionPinController {
    #[must_use]
    pub fn new(pin_file: PinFile, manager: Box<dyn VersionManager>) -> Self {
        Self { pin_file, manager }
    }

    #[must_use]
    pub fn pin_file(&self) -> &PinFile {
        &self.pin_file
    }

    /// Run `operation` and log any failure. The exit code is left to the caller.
    ///
    /// # Errors
    /// Returns the error of the step that stopped the operation.
    pub async fn execute(&self, operation: &Operation) -> Result<ManagedVersionRequest, PinError> {
        let result = match operation {
            Operation::Install { node_version } => self.install(node_version).await,
            Operation::Use { node_version } => self.switch(node_version).await,
            Operation::Auto => self.auto().await,
        };

        result.inspect_err(|err| {
            error!("{err}");
            match (operation, err) {
                (_, PinError::DelegateCommand { source, .. }) => debug!("{source}"),
                (Operation::Auto, PinError::FileAccess { .. }) => {
                    let tool = self.manager.tool();
                    error!(
                        "Failed to manage Node.js version with {tool}. Make sure you have the necessary permissions."
                    );
                }
                _ => {}
            }
        })
    }

    /// Probe the tool, make sure the pin file exists, then install and
    /// activate `version`.
    ///
    /// # Errors
    /// Fails when the tool is missing, the pin file cannot be created or read,
    /// the pin file is blank, or the tool fails.
    pub async fn install(&self, version: &str) -> Result<ManagedVersionRequest, PinError> {
        let tool = self.manager.tool();
        if !self.manager.is_available().await {
            return Err(PinError::ManagerUnavailable { tool });
        }

        let pinned = self.pin_file.ensure(version)?;
        if pinned.is_empty() {
            return Err(PinError::EmptyVersion {
                path: self.pin_file.path().to_string(),
            });
        }
        info!("✔ Found Node.js version {pinned} using {tool}...");

        let request = ManagedVersionRequest::new(version, tool);
        self.run_install_and_switch(&request).await?;
        Ok(request)
    }

    /// Overwrite the pin file with `version`, then install and activate it.
    ///
    /// # Errors
    /// Fails when the pin file cannot be written or the tool fails.
    pub async fn switch(&self, version: &str) -> Result<ManagedVersionRequest, PinError> {
        self.pin_file.write_version(version)?;

        let request = ManagedVersionRequest::new(version, self.manager.tool());
        self.run_install_and_switch(&request).await?;
        Ok(request)
    }

    /// Install and activate whatever the pin file names.
    ///
    /// # Errors
    /// Fails when the pin file is missing, blank or unreadable, or the tool fails.
    pub async fn auto(&self) -> Result<ManagedVersionRequest, PinError> {
        let pinned = self.pin_file.read_version()?;

        let request = ManagedVersionRequest::new(pinned, self.manager.tool());
        self.run_install_and_switch(&request).await?;
        Ok(request)
    }

    /// Run `install` then `use` for the request. `use` is skipped when the
    /// install fails.
    ///
    /// # Errors
    /// Returns [`PinError::DelegateCommand`] when either command fails.
    pub async fn run_install_and_switch(
        &self,
        request: &ManagedVersionRequest,
    ) -> Result<(), PinError> {
        let ManagedVersionRequest { version, tool } = request;
        let delegate_error = |source| PinError::DelegateCommand {
            tool: *tool,
            version: version.clone(),
            source,
        };

        info!("Installing Node.js version {version} using {tool}...");
        self.manager
            .install(version)
            .await
            .map_err(delegate_error)?;
        self.manager
            .use_version(version)
            .await
            .map_err(delegate_error)?;

        info!("{}", success_banner(*tool));
        Ok(())
    }
}
