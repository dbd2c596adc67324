//! Logger bootstrap for the binaries.
//!
//! Library code only talks to the `log` facade. Events are `key=value`
//! lines (`event=profile_load status=ok ...`) so they stay greppable.

use crate::config::LoggingSettings;
use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

const LOG_FILE_BASENAME: &str = "portfolio-assistant";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts the global logger. `RUST_LOG` overrides the configured level.
///
/// The returned handle must be kept alive for the lifetime of the process.
pub fn init_logging(settings: &LoggingSettings) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(&settings.level)
        .with_context(|| format!("Invalid log level `{}`", settings.level))?;

    let handle = match &settings.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {:?}", dir))?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()
        }
        None => logger
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format)
            .start(),
    }
    .context("Failed to start logger")?;

    info!(
        "event=app_start status=ok version={} level={}",
        env!("CARGO_PKG_VERSION"),
        settings.level
    );
    Ok(handle)
}
