//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for flagpole binaries.
//!
//! * Console output, compact and coloured by default, or one JSON object per line.
//! * Filtering through `RUST_LOG`, a programmatic [`LoggerBuilder::env_filter`] directive, or
//!   a plain minimum [`LoggerBuilder::level`].
//!
//! ## Example
//!
//! ```rust
//! # use flagpole_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("flagctl")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::io;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
pub struct LoggerConfig {
    level: LevelFilter,
    json: bool,
    ansi: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level: LevelFilter::INFO, json: false, ansi: true, env_filter: None }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger. Required before [`LoggerBuilder::init`].
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `flagpole_flags=debug`).
    ///
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Emits one JSON object per event instead of the compact format.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    /// Toggles ANSI colours for the compact format.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// Events are written to stderr so stdout stays free for program output.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name or an invalid filter.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.name.0.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        let env_filter = build_env_filter(&self.config)?;

        let fmt_layer = layer().with_writer(io::stderr);
        let fmt_layer = if self.config.json {
            fmt_layer.json().boxed()
        } else {
            fmt_layer.compact().with_ansi(self.config.ansi).boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context(format!("Installing subscriber for '{}'", self.name.0))?;

        tracing::debug!(logger = %self.name.0, "Logging initialized");

        Ok(Logger { name: self.name.0 })
    }
}

/// A handle to the initialized logging system.
#[must_use = "Keep the handle for the lifetime of the program."]
#[derive(Debug)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// Name the logger was initialized with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_initial_state() {
        let builder = Logger::builder().name("test-app").env_filter("flagpole=debug");
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert!(!builder.config.json);
        assert!(builder.config.ansi);
        assert_eq!(builder.config.env_filter.as_deref(), Some("flagpole=debug"));
    }

    #[test]
    fn builder_configuration() {
        let builder =
            Logger::builder().name("test-app").level(LevelFilter::WARN).json(true).ansi(false);
        assert_eq!(builder.config.level, LevelFilter::WARN);
        assert!(builder.config.json);
        assert!(!builder.config.ansi);
    }

    #[test]
    fn invalid_filter_is_rejected_before_install() {
        let err = Logger::builder()
            .name("test-app")
            .env_filter("flagpole=notalevel")
            .init()
            .expect_err("filter should not parse");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::builder().name("  ").init().expect_err("blank name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
