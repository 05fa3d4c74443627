use std::{env, io};

use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

use crate::common::errors::Result;

/// Install the global subscriber writing to stderr
///
/// Keep the returned guard alive until the program ends.
pub fn init_tracing(debug: bool, no_color: bool) -> Result<WorkerGuard> {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(rust_log.as_deref(), debug)?;

    let (writer, guard) = tracing_appender::non_blocking(io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second]"
        )))
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(writer)
        .init();

    Ok(guard)
}

/// `RUST_LOG` wins over `--debug`; a malformed `RUST_LOG` is an error
pub fn log_filter(rust_log: Option<&str>, debug: bool) -> Result<EnvFilter> {
    let directives = match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ if debug => "debug",
        _ => "info",
    };
    Ok(EnvFilter::try_new(directives)?)
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::log_filter;
    use crate::common::errors::Error;

    fn max_level(rust_log: Option<&str>, debug: bool) -> Option<LevelFilter> {
        log_filter(rust_log, debug).unwrap().max_level_hint()
    }

    #[test]
    fn test_log_filter_defaults() {
        assert_eq!(max_level(None, false), Some(LevelFilter::INFO));
        assert_eq!(max_level(None, true), Some(LevelFilter::DEBUG));
        assert_eq!(max_level(Some(" "), true), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_rust_log_overrides_debug() {
        assert_eq!(max_level(Some("lifo=trace"), false), Some(LevelFilter::TRACE));
        assert_eq!(max_level(Some("warn"), true), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_malformed_rust_log_is_reported() {
        assert!(matches!(
            log_filter(Some("lifo=loudest"), true),
            Err(Error::LogFilter(_))
        ));
    }
}
