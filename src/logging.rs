//! Structured logging setup and request correlation

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{field, info, warn, Span};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Log configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level or filter directive (error, warn, info, debug, trace)
    pub level: String,

    /// Log format (json, human)
    pub format: LogFormat,

    /// Log one line per answered request
    pub request_logging: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Human,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Human,
            request_logging: true,
        }
    }
}

/// Correlation data for one question
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub operation: Option<String>,
    pub start_time: Instant,
}

impl RequestContext {
    /// Create a new request context with a generated request ID
    pub fn new() -> Self {
        Self::with_id(format!("req_{}", Uuid::new_v4().simple()))
    }

    /// Create context with specific request ID
    pub fn with_id(request_id: String) -> Self {
        Self {
            request_id,
            operation: None,
            start_time: Instant::now(),
        }
    }

    /// Set operation name
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Logging utility for structured logging with context
#[derive(Debug, Clone)]
pub struct Logger {
    config: LogConfig,
}

impl Logger {
    /// Logger without a global subscriber (tests, embedding)
    pub fn new(config: LogConfig) -> Self {
        Self { config }
    }

    /// Initialize global logging to stderr. `RUST_LOG` takes precedence over
    /// the configured level.
    pub fn init(config: LogConfig) -> Result<Self> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .map_err(|e| Error::Config(format!("invalid log level '{}': {}", config.level, e)))?;

        let registry = tracing_subscriber::registry().with(filter);

        let installed = match config.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_span_events(FmtSpan::CLOSE),
                )
                .try_init(),
            LogFormat::Human => registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr)
                        .with_span_events(FmtSpan::CLOSE),
                )
                .try_init(),
        };
        installed.map_err(|e| Error::Internal(format!("logging already initialized: {}", e)))?;

        info!(
            level = %config.level,
            format = ?config.format,
            request_logging = config.request_logging,
            "Logging system initialized"
        );

        Ok(Self { config })
    }

    /// Create a request span with context
    pub fn request_span(&self, ctx: &RequestContext) -> Span {
        let span = tracing::info_span!(
            "qa_request",
            request_id = %ctx.request_id,
            operation = field::Empty,
            intent = field::Empty,
            duration_ms = field::Empty,
        );

        if let Some(ref operation) = ctx.operation {
            span.record("operation", operation.as_str());
        }

        span
    }

    /// Log request completion with timing
    pub fn log_request_complete(&self, ctx: &RequestContext, intent: Option<&str>, answered: bool) {
        if !self.config.request_logging {
            return;
        }

        let duration_ms = ctx.elapsed_ms();
        if answered {
            info!(
                request_id = %ctx.request_id,
                operation = ?ctx.operation,
                intent = ?intent,
                duration_ms,
                "Question answered"
            );
        } else {
            warn!(
                request_id = %ctx.request_id,
                operation = ?ctx.operation,
                intent = ?intent,
                duration_ms,
                "Question fell back to a default answer"
            );
        }
    }
}
