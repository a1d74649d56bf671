use crate::cli::Args;
use crate::config::Config;
use crate::constants::DEFAULT_LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVE: &str = "kbo_schedule=info";

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a custom log path into (directory, file name).
pub fn split_log_path(custom_path: &str) -> (String, String) {
    let path = Path::new(custom_path);
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_LOG_FILE_NAME);
    (parent.to_string_lossy().to_string(), file_name.to_string())
}

/// Sets up logging for the application.
///
/// - Always logs to a daily rolling file
/// - Server mode and `--debug` also log to stdout
/// - `--once` without `--debug` keeps stdout for the listing
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: Option<&Config>) -> Result<(String, WorkerGuard), AppError> {
    let config_log_path = config.and_then(|config| config.log_file_path.as_ref());

    let custom_log_path = args.log_file.as_ref().or(config_log_path);
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => split_log_path(custom_path),
        None => (
            Config::get_log_dir_path(),
            DEFAULT_LOG_FILE_NAME.to_string(),
        ),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive the program's logging for buffered lines to flush
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let registry = tracing_subscriber::registry().with(file_layer);

    if crate::cli::logs_to_stdout(args) {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter()?),
            )
            .try_init()
            .map_err(|e| AppError::log_setup_error(e.to_string()))?;
    } else {
        registry
            .try_init()
            .map_err(|e| AppError::log_setup_error(e.to_string()))?;
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
