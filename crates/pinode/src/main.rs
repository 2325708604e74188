use std::process::ExitCode;

use clap::Parser;
use log::{error, warn};

use pinode::cli::parse_error_exit_code;
use pinode::manager::create_manager;
use pinode::{Cli, PinFile, PinPath, Settings, VersionPinController, exit_code, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_error_exit_code(&err));
        }
    };

    let (mut settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };
    settings.apply_overrides(&cli);

    logging::init_logging(settings.debug_logging, settings.max_log_size_bytes);

    if let Some(err) = settings_error {
        warn!("{err}; using default settings");
    }

    let pin_path = match PinPath::parse(settings.pin_file.clone()) {
        Ok(path) => path,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let controller = VersionPinController::new(PinFile::new(pin_path), create_manager(&settings));
    let result = controller.execute(&cli.command).await;

    ExitCode::from(exit_code(&cli.command, &result))
}
