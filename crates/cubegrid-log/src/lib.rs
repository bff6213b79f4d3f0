//! Structured logging for the cube grid samples.
//!
//! Console output carries uptime timestamps and module targets; debug builds
//! additionally write JSON lines to a log file. The filter comes from
//! `RUST_LOG` when set, otherwise from the config's `log.level`.

use cubegrid_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config provides one.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "cubegrid.log";

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file (debug builds only)
/// * `debug_build` - enables file logging
/// * `config` - supplies `log.level` when `RUST_LOG` is unset
///
/// # Examples
///
/// ```no_run
/// use cubegrid_config::Config;
/// use cubegrid_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config_env_filter(config));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// The filter directive for the given config, falling back to
/// [`DEFAULT_FILTER`] when the configured level is blank.
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.log.level.trim().is_empty() => config.log.level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// The filter for the config's `log.level`. A level that does not parse
/// falls back to [`DEFAULT_FILTER`] instead of silently dropping output.
pub fn config_env_filter(config: Option<&Config>) -> EnvFilter {
    let directive = filter_directive(config);
    EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("Invalid log level {directive:?}: {err}, using {DEFAULT_FILTER:?}");
        EnvFilter::new(DEFAULT_FILTER)
    })
}
