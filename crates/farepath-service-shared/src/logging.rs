//! Structured logging setup for the farepath service.
//!
//! # Environment Variables
//!
//! - `LOG_FORMAT`: Output format, either `json` (default) or `text`
//! - `RUST_LOG`: Log level filter (default: `info`)
//! - `SERVICE_NAME`: Service name reported at startup (optional)
//!
//! # Example
//!
//! ```no_run
//! use farepath_service_shared::logging::{LoggingConfig, init_logging};
//!
//! let config = LoggingConfig::from_env().with_service("farepath");
//! init_logging(&config);
//! ```

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON structured logging (default, production).
    #[default]
    Json,
    /// Human-readable text logging (development).
    Text,
}

impl LogFormat {
    /// Parse a log format name.
    ///
    /// Accepts "json", "text", or "pretty" (alias for text), ignoring case.
    /// Anything else falls back to `Json`.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => LogFormat::Text,
            _ => LogFormat::Json,
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format (json or text).
    pub format: LogFormat,
    /// Log level filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Service name reported when logging starts.
    pub service: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            level: "info".to_string(),
            service: None,
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        let format = std::env::var("LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or(LogFormat::Json);

        let level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let service = std::env::var("SERVICE_NAME").ok();

        Self {
            format,
            level,
            service,
        }
    }

    /// Set the service name unless `SERVICE_NAME` already provided one.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        if self.service.is_none() {
            self.service = Some(service.into());
        }
        self
    }
}

/// Install the global tracing subscriber.
///
/// Call once at startup. Later calls leave the first subscriber in place.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Text => registry.with(fmt::layer().pretty()).try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .try_init(),
    };

    if installed.is_ok() {
        tracing::info!(
            service = config.service.as_deref().unwrap_or("farepath"),
            format = ?config.format,
            "logging initialised"
        );
    }
}
