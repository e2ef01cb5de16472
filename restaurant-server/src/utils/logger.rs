//! Logging Infrastructure
//!
//! Structured logging setup for development and production:
//! - console output, pretty or JSON
//! - optional daily rotating files under `LOG_DIR`
//!   - `app/` receives everything except the `security` target
//!   - `security/` receives only `security` events (see [`security_log!`](crate::security_log))

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug"); `RUST_LOG` takes precedence
/// * `json_format` - JSON console output (production) instead of pretty output
/// * `log_dir` - Optional directory for rotating log files
///
/// # Examples
/// ```no_run
/// # use restaurant_server::init_logger_with_file;
/// init_logger_with_file("debug", false, None)?;
/// init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let files = match log_dir {
        Some(dir) => Some(file_layers(Path::new(dir), json_format)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(files)
        .with(env_filter)
        .with(console_layer)
        .try_init()?;

    Ok(())
}

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

fn file_layers(log_dir: &Path, json_format: bool) -> anyhow::Result<Vec<BoxedLayer>> {
    let app_log_dir = log_dir.join("app");
    let security_log_dir = log_dir.join("security");
    fs::create_dir_all(&app_log_dir)?;
    fs::create_dir_all(&security_log_dir)?;

    let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
    let security_log = RollingFileAppender::new(Rotation::DAILY, security_log_dir, "security");

    let app_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(app_log));
    let security_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(security_log));

    let not_security =
        tracing_subscriber::filter::filter_fn(|meta| meta.target() != "security");
    let only_security =
        tracing_subscriber::filter::filter_fn(|meta| meta.target() == "security");

    let layers = if json_format {
        vec![
            app_layer.json().with_filter(not_security).boxed(),
            security_layer.json().with_filter(only_security).boxed(),
        ]
    } else {
        vec![
            app_layer.with_filter(not_security).boxed(),
            security_layer.with_filter(only_security).boxed(),
        ]
    };
    Ok(layers)
}

/// Initialize console-only logging
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_layers_create_directories() {
        let dir = tempfile::tempdir().unwrap();

        let layers = file_layers(dir.path(), false).unwrap();

        assert_eq!(layers.len(), 2);
        assert!(dir.path().join("app").is_dir());
        assert!(dir.path().join("security").is_dir());
    }
}
