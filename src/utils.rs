use anyhow::Result;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::constants::{VERBOSITY_SILENT, VERBOSITY_VERBOSE};

pub fn log_level(verbosity: &str) -> Level {
    match verbosity {
        VERBOSITY_SILENT => Level::ERROR,
        VERBOSITY_VERBOSE => Level::DEBUG,
        _ => Level::INFO,
    }
}

/// Sends log output to stderr so stdout carries only the report.
///
/// `RUST_LOG` directives are honoured on top of `verbosity`. A subscriber
/// that is already installed is left in place.
pub fn setup_logging(verbosity: &str) -> Result<()> {
    let level = log_level(verbosity);

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("router_patch_check={}", level).parse()?);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Logging already initialised, keeping existing subscriber");
    }

    Ok(())
}

pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs_f64();
    if seconds < 1.0 {
        format!("{:.1}ms", seconds * 1000.0)
    } else if seconds < 60.0 {
        format!("{:.1}s", seconds)
    } else {
        format!("{:.1}m", seconds / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level("silent"), Level::ERROR);
        assert_eq!(log_level("normal"), Level::INFO);
        assert_eq!(log_level("verbose"), Level::DEBUG);
        assert_eq!(log_level("anything"), Level::INFO);
    }

    #[test]
    fn test_setup_logging_twice() {
        assert!(setup_logging("verbose").is_ok());
        assert!(setup_logging("normal").is_ok());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250.0ms");
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
    }
}
