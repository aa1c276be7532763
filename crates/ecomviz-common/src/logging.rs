//! Structured logging infrastructure for EcomViz

use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "ecomviz_graphs=trace")
    pub level: String,
    /// Whether to emit one JSON object per event
    pub json_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include span open/close events in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

/// Builds the level filter: `RUST_LOG` wins, then the configured level, then `info`.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Subscriber used while the configuration itself is being loaded, before
/// [`init_logging`] can install the configured one.
///
/// Install it with [`tracing::subscriber::with_default`] around the loading
/// code. Events go to stderr in the compact format.
pub fn bootstrap_subscriber(level: &str) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .finish()
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = build_filter(&config.level);

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let file = match &config.file_path {
        Some(path) => Some(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?,
        ),
        None => None,
    };

    if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        match file {
            Some(file) => registry.with(layer.with_writer(file)).try_init()?,
            None => registry.with(layer.with_writer(std::io::stderr)).try_init()?,
        }
    } else if config.pretty_format {
        let layer = fmt::layer()
            .pretty()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        match file {
            Some(file) => registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init()?,
            None => registry.with(layer.with_writer(std::io::stderr)).try_init()?,
        }
    } else {
        let layer = fmt::layer()
            .compact()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        match file {
            Some(file) => registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init()?,
            None => registry.with(layer.with_writer(std::io::stderr)).try_init()?,
        }
    }

    Ok(())
}
