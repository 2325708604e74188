use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::OpenOptions;
use std::path::Path;

use pinode_platform::AppPaths;

const LOG_TARGET_PREFIX: &str = "pinode";

fn trim_log_file_if_oversized(log_path: &Path, max_log_size: u64) {
    if let Ok(metadata) = std::fs::metadata(log_path)
        && metadata.len() > max_log_size
        && let Ok(contents) = std::fs::read(log_path)
    {
        let half = contents.len() / 2;
        let keep_from = contents[half..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(half, |pos| half + pos + 1);
        let _ = std::fs::write(log_path, &contents[keep_from..]);
    }
}

fn file_logger(max_log_size: u64) -> Option<Box<dyn SharedLogger>> {
    let paths = AppPaths::new().ok()?;
    paths.ensure_dirs().ok()?;
    let log_path = paths.log_file();

    trim_log_file_if_oversized(&log_path, max_log_size);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok()?;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str(LOG_TARGET_PREFIX)
        .build();

    Some(WriteLogger::new(LevelFilter::Debug, config, file))
}

/// Terminal output carries the user-facing messages. With `debug_enabled`
/// the terminal also shows debug lines and everything is appended to the
/// log file.
pub fn init_logging(debug_enabled: bool, max_log_size: u64) {
    let terminal_level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .add_filter_allow_str(LOG_TARGET_PREFIX)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        terminal_level,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if debug_enabled {
        match file_logger(max_log_size) {
            Some(logger) => loggers.push(logger),
            None => eprintln!("pinode: could not open the debug log file"),
        }
    }

    let _ = CombinedLogger::init(loggers);

    if debug_enabled && let Ok(paths) = AppPaths::new() {
        log::debug!(
            "Debug logging initialized, log file: {}",
            paths.log_file().display()
        );
    }
}
