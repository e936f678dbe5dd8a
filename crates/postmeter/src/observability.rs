//! Logging and tracing setup for the CLI.
//!
//! Two layers share one filter:
//! - a compact human-readable layer on stderr
//! - an optional JSON-lines file layer, written through a non-blocking
//!   `tracing-appender` worker
//!
//! The file layer is enabled when `POSTMETER_LOG_PATH` names a file, or when a
//! log directory comes from `POSTMETER_LOG_DIR` or the `log_dir` config key.
//! Directory logs roll daily.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const ENV_LOG_PATH: &str = "POSTMETER_LOG_PATH";
const ENV_LOG_DIR: &str = "POSTMETER_LOG_DIR";

/// File name used for daily-rolled logs inside a log directory.
const LOG_FILE_PREFIX: &str = "postmeter.jsonl";

/// Crates whose events follow the configured level; everything else is held at `warn`.
const OWN_CRATES: &[&str] = &["postmeter", "postmeter_core"];

/// Where log files go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file path. Takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rolled log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from the environment, falling back to the configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(ENV_LOG_PATH)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let log_dir = std::env::var_os(ENV_LOG_DIR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }

    /// Whether a file layer will be installed.
    pub const fn file_logging_enabled(&self) -> bool {
        self.log_path.is_some() || self.log_dir.is_some()
    }
}

/// Build the filter from CLI flags, `RUST_LOG`, and the configured level.
///
/// `-q` and `-v` win over `RUST_LOG`, which wins over the config file.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => {
                if let Ok(filter) = EnvFilter::try_from_default_env() {
                    return filter;
                }
                config_level
            }
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(directives(level))
}

fn directives(level: &str) -> String {
    let mut parts = vec!["warn".to_string()];
    parts.extend(OWN_CRATES.iter().map(|krate| format!("{krate}={level}")));
    parts.join(",")
}

/// Install the global subscriber.
///
/// Returns the appender guard when file logging is active; keep it alive for
/// the life of the process so buffered lines are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    env_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match file_appender(config)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    tracing::debug!(
        file_logging = config.file_logging_enabled(),
        "observability initialized"
    );
    Ok(guard)
}

fn file_appender(
    config: &ObservabilityConfig,
) -> anyhow::Result<Option<tracing_appender::rolling::RollingFileAppender>> {
    if let Some(ref path) = config.log_path {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        ensure_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::never(dir, file_name)));
    }

    if let Some(ref dir) = config.log_dir {
        ensure_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::daily(
            dir,
            LOG_FILE_PREFIX,
        )));
    }

    Ok(None)
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}
