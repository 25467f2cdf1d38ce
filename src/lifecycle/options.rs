//! Supervisor configuration.
//!
//! Options are applied in order to [`LifecycleConfig::default`]; a later
//! option for the same setting wins.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::logger::Logger;
use super::signals::{OsSignals, SignalSource};

/// Default bound on the graceful shutdown phase.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// Default log prefix.
pub const DEFAULT_SERVICE_NAME: &str = "app";

/// Settings read by the supervisor. Immutable once built.
pub struct LifecycleConfig {
    pub shutdown_timeout: Duration,
    /// `None` resolves to the process-wide tracing logger.
    pub logger: Option<Arc<dyn Logger>>,
    /// Empty disables the log prefix.
    pub service_name: String,
    pub signals: Arc<dyn SignalSource>,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            logger: None,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            signals: Arc::new(OsSignals),
        }
    }
}

impl fmt::Debug for LifecycleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleConfig")
            .field("shutdown_timeout", &self.shutdown_timeout)
            .field("custom_logger", &self.logger.is_some())
            .field("service_name", &self.service_name)
            .finish()
    }
}

impl LifecycleConfig {
    /// Build a config from defaults plus `options`, applied in order.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = LifecycleOption>,
    {
        options
            .into_iter()
            .fold(Self::default(), |config, option| option.apply(config))
    }
}

/// A single configuration mutation.
pub enum LifecycleOption {
    ShutdownTimeout(Duration),
    Logger(Arc<dyn Logger>),
    ServiceName(String),
    Signals(Arc<dyn SignalSource>),
}

impl LifecycleOption {
    fn apply(self, mut config: LifecycleConfig) -> LifecycleConfig {
        match self {
            LifecycleOption::ShutdownTimeout(timeout) => config.shutdown_timeout = timeout,
            LifecycleOption::Logger(logger) => config.logger = Some(logger),
            LifecycleOption::ServiceName(name) => config.service_name = name,
            LifecycleOption::Signals(signals) => config.signals = signals,
        }
        config
    }
}

pub fn with_shutdown_timeout(timeout: Duration) -> LifecycleOption {
    LifecycleOption::ShutdownTimeout(timeout)
}

pub fn with_logger(logger: Arc<dyn Logger>) -> LifecycleOption {
    LifecycleOption::Logger(logger)
}

pub fn with_service_name(name: impl Into<String>) -> LifecycleOption {
    LifecycleOption::ServiceName(name.into())
}

/// Replace the OS signal source, e.g. with [`super::signals::ManualSignals`].
pub fn with_signal_source(signals: Arc<dyn SignalSource>) -> LifecycleOption {
    LifecycleOption::Signals(signals)
}
