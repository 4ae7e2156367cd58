//! Logging setup for the tracker CLI.
//!
//! Events go to stderr so that reports on stdout stay machine-readable.
//! `RUST_LOG` takes precedence over the configured level.

use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber using the level from settings
pub fn init(config: &LoggingConfig) {
    init_with_level(&config.level)
}

/// Install the global subscriber with a fallback level
/// (debug, info, warn, error).
pub fn init_with_level(default_level: &str) {
    tracing_subscriber::registry()
        .with(filter_for(default_level))
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn filter_for(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{day_action_info, BodyParameters};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_discarded_day_record_is_logged() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_env_filter(EnvFilter::new("warn"))
            .finish();

        let out = tracing::subscriber::with_default(subscriber, || {
            day_action_info("not a record", &BodyParameters::new(70.0, 1.7))
        });

        assert!(out.is_empty());
        let logs = captured.text();
        assert!(logs.contains("WARN"), "logs: {}", logs);
        assert!(logs.contains("Discarding daily step record"), "logs: {}", logs);
        assert!(logs.contains("not a record"), "logs: {}", logs);
    }

    #[test]
    fn test_valid_day_record_logs_nothing_at_warn() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_env_filter(EnvFilter::new("warn"))
            .finish();

        let out = tracing::subscriber::with_default(subscriber, || {
            day_action_info("6000,1h", &BodyParameters::new(80.0, 1.8))
        });

        assert!(!out.is_empty());
        assert!(captured.text().is_empty());
    }
}
