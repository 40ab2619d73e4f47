//! Logging for the `shapefit` binary.
//!
//! Library crates only emit `tracing` events; this module decides where they
//! go. Levels used by the ShapeFit crates:
//!
//! - `warn`: rejected quiz actions, unknown step tags
//! - `info`: size chart loads, match outcomes, quiz start
//! - `debug`: step transitions, recorded answers, config loading
//!
//! `RUST_LOG` replaces the built-in filter unless a level was given on the
//! command line.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Crates whose events follow the configured level.
const SHAPEFIT_TARGETS: &[&str] = &[
    "shapefit",
    "shapefit_cli",
    "shapefit_core",
    "shapefit_model",
    "shapefit_standards",
];

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter`.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// One line per event.
    Compact,
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::Pretty,
            log_file: None,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Install the global subscriber for `config`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let writer = match &config.log_file {
        Some(path) => file_writer(OpenOptions::new().create(true).append(true).open(path)?),
        None => BoxMakeWriter::new(io::stderr),
    };
    build_subscriber(config, writer).init();
    Ok(())
}

/// Subscriber for `config` writing to `writer`, without installing it.
pub fn build_subscriber(
    config: &LogConfig,
    writer: BoxMakeWriter,
) -> impl Subscriber + Send + Sync + use<> {
    tracing_subscriber::registry()
        .with(format_layer(config, writer))
        .with(build_env_filter(config.level_filter, config.use_env_filter))
}

fn file_writer(file: File) -> BoxMakeWriter {
    // `Mutex<W>` hands out a locked guard per event.
    BoxMakeWriter::new(Mutex::new(file))
}

fn format_layer(
    config: &LogConfig,
    writer: BoxMakeWriter,
) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target);
    if config.format == LogFormat::Json {
        return layer.json().boxed();
    }
    let layer = layer.with_ansi(config.with_ansi);
    match (config.format == LogFormat::Compact, config.with_timestamps) {
        (true, true) => layer.compact().boxed(),
        (true, false) => layer.compact().without_time().boxed(),
        (false, true) => layer.boxed(),
        (false, false) => layer.without_time().boxed(),
    }
}

/// Filter directives for `level_filter`.
///
/// External crates never log more than warn level.
pub fn default_filter_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    let external = if level_filter < LevelFilter::WARN {
        level.clone()
    } else {
        "warn".to_string()
    };
    std::iter::once(external)
        .chain(SHAPEFIT_TARGETS.iter().map(|target| format!("{target}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

fn build_env_filter(level_filter: LevelFilter, use_env: bool) -> EnvFilter {
    let fallback = || EnvFilter::new(default_filter_directives(level_filter));
    if use_env {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(config: &LogConfig, emit: impl FnOnce()) -> String {
        let captured = Captured::default();
        let subscriber = build_subscriber(config, BoxMakeWriter::new(captured.clone()));
        tracing::subscriber::with_default(subscriber, emit);
        captured.text()
    }

    fn quiet_config() -> LogConfig {
        LogConfig {
            use_env_filter: false,
            with_ansi: false,
            ..LogConfig::default()
        }
    }

    #[test]
    fn compact_output_respects_crate_levels() {
        let config = quiet_config()
            .with_level_filter(LevelFilter::INFO)
            .with_format(LogFormat::Compact);
        let output = capture(&config, || {
            tracing::info!(target: "shapefit_core::engine", size = "34D", "size matched");
            tracing::debug!(target: "shapefit_core::engine", "step transition");
            tracing::info!(target: "csv::reader", "external noise");
        });

        assert!(output.contains("size matched"), "{output}");
        assert!(output.contains("34D"), "{output}");
        assert!(!output.contains("step transition"), "{output}");
        assert!(!output.contains("external noise"), "{output}");
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn json_output_is_one_object_per_event() {
        let config = quiet_config()
            .with_level_filter(LevelFilter::WARN)
            .with_format(LogFormat::Json);
        let output = capture(&config, || {
            tracing::warn!(target: "shapefit_core::engine", tag = "checkout", "unknown step tag");
            tracing::info!(target: "shapefit_core::engine", "size matched");
        });

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1, "{output}");
        assert!(lines[0].starts_with('{') && lines[0].ends_with('}'));
        assert!(lines[0].contains("\"level\":\"WARN\""));
        assert!(lines[0].contains("unknown step tag"));
    }

    #[test]
    fn log_file_receives_events() {
        let path = std::env::temp_dir().join(format!("shapefit-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        let config = quiet_config().with_level_filter(LevelFilter::INFO);
        let subscriber = build_subscriber(&config, file_writer(file));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "shapefit_standards", "size chart loaded");
        });

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("size chart loaded"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn filter_keeps_external_crates_at_warn() {
        let directives = default_filter_directives(LevelFilter::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("shapefit_core=debug"));
    }

    #[test]
    fn filter_quiets_everything_when_off() {
        let directives = default_filter_directives(LevelFilter::OFF);
        assert!(directives.starts_with("off,"));
        assert!(directives.contains("shapefit_standards=off"));
    }
}
