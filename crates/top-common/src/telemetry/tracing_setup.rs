//! `tracing` subscriber setup
//!
//! `RUST_LOG` overrides the configured level when set.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    registry::Registry,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::config::AppSettings;

/// Output options for the global subscriber
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub level: Level,
    /// One JSON object per line instead of the human-readable format
    pub json: bool,
    /// Emit an event when a span opens and closes
    pub span_events: bool,
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            span_events: false,
            file_line: true,
        }
    }
}

impl TracingConfig {
    /// Production logs JSON without source locations; other environments log
    /// text with span events. `debug` selects DEBUG over INFO in both.
    #[must_use]
    pub fn for_app(settings: &AppSettings) -> Self {
        let production = settings.env.is_production();
        Self {
            level: if settings.debug { Level::DEBUG } else { Level::INFO },
            json: production,
            span_events: !production,
            file_line: !production,
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
    }

    fn layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let span_events = if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let fmt_layer = fmt::layer()
            .with_file(self.file_line)
            .with_line_number(self.file_line)
            .with_span_events(span_events);

        if self.json {
            fmt_layer.json().with_filter(self.filter()).boxed()
        } else {
            fmt_layer.with_filter(self.filter()).boxed()
        }
    }
}

/// Install the global subscriber
///
/// Fails instead of panicking when a subscriber is already set.
pub fn try_init_tracing_with_config(config: &TracingConfig) -> Result<(), TracingError> {
    tracing_subscriber::registry()
        .with(config.layer())
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
