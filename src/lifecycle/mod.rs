//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Configure → Arm signals → Spawn App::run → Wait for trigger
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Cancel run → Spawn App::shutdown → Wait for resolution → Exit code
//!
//! Signals (signals.rs):
//!     First SIGTERM/SIGINT → Trigger graceful shutdown
//!     Second SIGTERM/SIGINT → Forced exit
//! ```
//!
//! # Design Decisions
//! - One supervised application per invocation
//! - Shutdown has timeout: forced exit after deadline
//! - A failed run still gets a graceful shutdown; only the shutdown phase
//!   decides the exit code
//! - Panics in run/shutdown are reported as errors, never propagated

pub mod logger;
pub mod options;
pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod supervisor;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::errors::BoxError;

pub use logger::{Logger, ServiceLogger, TracingLogger};
pub use options::{
    with_logger, with_service_name, with_shutdown_timeout, with_signal_source, LifecycleConfig,
    LifecycleOption,
};
pub use shutdown::{Resolution, ShutdownContext, EXIT_FAILURE, EXIT_SUCCESS};
pub use signals::{ManualSignals, OsSignals, SignalListener, SignalSource, TermSignal};
pub use supervisor::run_with_graceful_shutdown;

/// Application driven by the supervisor.
#[async_trait]
pub trait App: Send + Sync + 'static {
    /// Main work. Must return promptly once `ctx` is cancelled; the
    /// supervisor never aborts this task.
    async fn run(&self, ctx: CancellationToken) -> Result<(), BoxError>;

    /// Release resources before `ctx.deadline()`. An error forces exit code 1.
    async fn shutdown(&self, ctx: ShutdownContext) -> Result<(), BoxError>;
}
