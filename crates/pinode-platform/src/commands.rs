use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;

use crate::environment::Platform;

#[cfg(windows)]
use std::os::windows::process::CommandExt;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x08000000;

pub trait HideWindow {
    fn hide_window(&mut self) -> &mut Self;
}

impl HideWindow for Command {
    #[cfg(windows)]
    fn hide_window(&mut self) -> &mut Self {
        self.creation_flags(CREATE_NO_WINDOW)
    }

    #[cfg(not(windows))]
    fn hide_window(&mut self) -> &mut Self {
        self
    }
}

/// Builds the shell invocations used to reach a version manager.
///
/// Probe commands discard all output. Invocations inherit the parent's
/// stdin, stdout and stderr so the tool talks to the user directly.
pub trait CommandExecutor: std::fmt::Debug + Send + Sync {
    fn platform(&self) -> Platform;

    /// Command that exits successfully only when `program` can be resolved.
    fn probe(&self, program: &str) -> Command;

    /// Command that runs `program` with `args`.
    fn invoke(&self, program: &str, args: &[&str]) -> Command;
}

/// `sh -c` based executor. The optional prelude runs before every command,
/// which is how shell-function tools such as nvm get loaded.
#[derive(Debug, Clone, Default)]
pub struct PosixShell {
    prelude: Option<String>,
}

impl PosixShell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prelude(prelude: impl Into<String>) -> Self {
        Self {
            prelude: Some(prelude.into()),
        }
    }

    #[must_use]
    pub fn prelude(&self) -> Option<&str> {
        self.prelude.as_deref()
    }

    fn script(&self, body: &str) -> String {
        match &self.prelude {
            Some(prelude) => format!("{prelude}; {body}"),
            None => body.to_string(),
        }
    }
}

impl CommandExecutor for PosixShell {
    fn platform(&self) -> Platform {
        Platform::Posix
    }

    fn probe(&self, program: &str) -> Command {
        let script = self.script("command -v \"$1\"");
        let mut cmd = Command::new("sh");
        cmd.args(["-c", &script, "sh", program]);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    fn invoke(&self, program: &str, args: &[&str]) -> Command {
        let script = self.script(&format!("{program} \"$@\""));
        let mut cmd = Command::new("sh");
        cmd.args(["-c", &script, "sh"]);
        cmd.args(args);
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PowerShell;

impl PowerShell {
    fn quote(arg: &str) -> String {
        format!("'{}'", arg.replace('\'', "''"))
    }
}

impl CommandExecutor for PowerShell {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn probe(&self, program: &str) -> Command {
        let mut cmd = Command::new("powershell.exe");
        cmd.args(["-Command", &format!("Get-Command {program}")]);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd.hide_window();
        cmd
    }

    fn invoke(&self, program: &str, args: &[&str]) -> Command {
        let line = std::iter::once(program.to_string())
            .chain(args.iter().map(|arg| Self::quote(arg)))
            .collect::<Vec<_>>()
            .join(" ");
        let mut cmd = Command::new("powershell.exe");
        cmd.args(["-Command", &line]);
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

/// Select the executor for `platform`. The prelude only applies to POSIX shells.
#[must_use]
pub fn native_executor(platform: Platform, prelude: Option<String>) -> Arc<dyn CommandExecutor> {
    log::debug!(
        "Using {} shell executor (prelude: {})",
        platform.display_name(),
        prelude.as_deref().unwrap_or("none")
    );
    match platform {
        Platform::Windows => Arc::new(PowerShell),
        Platform::Posix => Arc::new(PosixShell { prelude }),
    }
}
