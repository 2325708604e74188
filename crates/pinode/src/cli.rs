use clap::{Parser, Subcommand};

#[derive(Clone, Debug, Parser)]
#[command(
    name = "pinode",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pin a project's Node.js version and install it with nvm",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Operation,

    /// Pin file to read and write (defaults to .nvmrc)
    #[arg(long, global = true, value_name = "PATH")]
    pub pin_file: Option<String>,

    /// Print debug output and write it to the log file
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Operation {
    /// Install a specific Node.js version using nvm
    Install {
        /// Node.js version to install
        #[arg(value_name = "NODE_VERSION")]
        node_version: String,
    },
    /// Switch to a specific Node.js version using nvm
    Use {
        /// Node.js version to switch to
        #[arg(value_name = "NODE_VERSION")]
        node_version: String,
    },
    /// Automatically install and use the Node.js version in the pin file
    Auto,
}

/// Exit code for a failed parse. Help and version output succeed, anything
/// else (including a missing command) exits with 1.
#[must_use]
pub fn parse_error_exit_code(err: &clap::Error) -> u8 {
    u8::from(err.use_stderr())
}
