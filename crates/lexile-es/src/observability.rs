//! Logging and tracing setup.
//!
//! Two layers:
//! - a human-readable layer on stderr, at `warn` unless `-q`/`-v` say otherwise
//! - a JSONL file layer (`lexile-es.jsonl`), filtered by `RUST_LOG` or the
//!   configured log level
//!
//! The file is `LEXILE_ES_LOG_PATH` if set, otherwise `lexile-es.jsonl` in
//! `LEXILE_ES_LOG_DIR`, the configured `log_dir`, or the platform data
//! directory. If no location is writable, file logging is skipped.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_NAME: &str = "lexile-es.jsonl";
const ENV_LOG_PATH: &str = "LEXILE_ES_LOG_PATH";
const ENV_LOG_DIR: &str = "LEXILE_ES_LOG_DIR";

/// Where logs go.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Explicit log file, from `LEXILE_ES_LOG_PATH`.
    pub log_path: Option<PathBuf>,
    /// Directory for `lexile-es.jsonl`.
    pub log_dir: Option<PathBuf>,
    /// Level for the stderr layer.
    pub console_level: LevelFilter,
}

impl ObservabilityConfig {
    /// Read the environment, using `config_log_dir` when `LEXILE_ES_LOG_DIR`
    /// is unset and the platform data directory as the last resort.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(ENV_LOG_PATH)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let log_dir = std::env::var_os(ENV_LOG_DIR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                lexile_es_core::config::user_data_dir()
                    .map(|dir| dir.join("logs").into_std_path_buf())
            });
        Self {
            log_path,
            log_dir,
            console_level: LevelFilter::WARN,
        }
    }

    /// Set the stderr level.
    #[must_use]
    pub const fn with_console_level(mut self, level: LevelFilter) -> Self {
        self.console_level = level;
        self
    }

    /// Resolved log file path, if any.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME)))
    }
}

/// Stderr level from the `-q` and `-v` flags.
pub const fn console_level(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// File filter: `RUST_LOG` if set, otherwise derived from the flags and the
/// configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns the file writer's guard; keep it alive until exit so buffered
/// lines are flushed.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(config.console_level);

    let (file_layer, guard) = match config.log_file().and_then(|path| open_log(&path)) {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(true)
                .with_span_list(false)
                .with_filter(filter);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .context("global tracing subscriber already set")?;

    Ok(guard)
}

/// Open a non-blocking appender for `path`, creating its directory.
fn open_log(path: &Path) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty())?;
    let file_name = path.file_name()?;
    std::fs::create_dir_all(dir).ok()?;
    let appender = tracing_appender::rolling::never(dir, file_name);
    Some(tracing_appender::non_blocking(appender))
}
