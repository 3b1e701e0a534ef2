use std::{env, error::Error};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{ConfigPaths, LogLevel};

const DAYS_TO_KEEP: usize = 7;

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

fn json_format() -> bool {
    env::var("DATAMENU_LOG_FORMAT").is_ok_and(|format| format == "json")
}

fn install<W>(level: LogLevel, writer: W, ansi: bool) -> Result<(), Box<dyn Error>>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(env_filter(level));
    let layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(ansi)
        .with_writer(writer);

    if json_format() {
        registry.with(layer.json()).try_init()?;
    } else {
        registry.with(layer.compact()).try_init()?;
    }

    Ok(())
}

/// Initialize tracing to stderr
///
/// Used when logs should be visible next to the menu, for example while
/// debugging. Uses RUST_LOG if set, otherwise `level`. Output is compact,
/// or JSON when DATAMENU_LOG_FORMAT=json.
///
/// # Errors
/// Returns error if tracing subscriber initialization fails
pub fn init(level: LogLevel) -> Result<(), Box<dyn Error>> {
    install(level, std::io::stderr, true)
}

/// Initialize tracing with file output
///
/// Logs go to a daily rolling file in the datamenu log directory and never
/// to stdout, so they cannot interleave with the interactive menu. The
/// returned guard flushes pending lines when dropped and must be kept alive
/// for the lifetime of the program.
///
/// # Errors
/// Returns error if file creation or tracing subscriber initialization fails
pub fn init_with_file(level: LogLevel) -> Result<WorkerGuard, Box<dyn Error>> {
    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("datamenu")
        .filename_suffix("log")
        .build(ConfigPaths::log_dir()?)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    install(level, non_blocking, false)?;
    Ok(guard)
}
