//! Logger facade used by the supervisor.
//!
//! The supervisor only needs two capabilities: write a line, and write a
//! formatted line. Everything else (levels, sinks, formatting) belongs to the
//! `tracing` subscriber installed by the binary.

use std::fmt;
use std::sync::Arc;

/// Minimal logging capability.
pub trait Logger: Send + Sync {
    /// Write a single line.
    fn log_line(&self, line: &str);

    /// Write a formatted line.
    fn log_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_line(&args.to_string());
    }
}

/// Process-wide logger backed by the global `tracing` dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log_line(&self, line: &str) {
        tracing::info!(target: "field_switcher::lifecycle", "{}", line);
    }
}

/// Decorator that prefixes every line with `[service] `.
pub struct ServiceLogger {
    prefix: String,
    inner: Arc<dyn Logger>,
}

impl ServiceLogger {
    pub fn new(service_name: &str, inner: Arc<dyn Logger>) -> Self {
        Self {
            prefix: format!("[{}] ", service_name),
            inner,
        }
    }
}

impl Logger for ServiceLogger {
    fn log_line(&self, line: &str) {
        self.inner.log_line(&format!("{}{}", self.prefix, line));
    }

    fn log_fmt(&self, args: fmt::Arguments<'_>) {
        self.inner.log_fmt(format_args!("{}{}", self.prefix, args));
    }
}

/// Resolve the logger the supervisor will use.
///
/// An unset logger falls back to [`TracingLogger`]; a non-empty service name
/// wraps the result in a [`ServiceLogger`].
pub fn resolve(logger: Option<Arc<dyn Logger>>, service_name: &str) -> Arc<dyn Logger> {
    let base = logger.unwrap_or_else(|| Arc::new(TracingLogger));
    if service_name.is_empty() {
        base
    } else {
        Arc::new(ServiceLogger::new(service_name, base))
    }
}
