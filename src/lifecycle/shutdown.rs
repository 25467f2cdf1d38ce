//! Bounded shutdown phase.
//!
//! # Resolution
//! ```text
//! shutdown returns Ok      → Completed   (exit 0)
//! shutdown returns Err     → Failed      (exit 1)
//! second signal first     → ForcedExit  (exit 1)
//! deadline elapses first   → TimedOut    (exit 1)
//! ```
//!
//! The first event observed wins. Losing branches are abandoned, not awaited:
//! the shutdown task keeps running until the process exits.

use std::time::Duration;

use tokio::time::Instant;

use super::signals::{next_signal, SignalListener, TermSignal};
use super::startup::{flatten, OutcomeReceiver};
use crate::errors::BoxError;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Deadline used when `now + timeout` does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Deadline handed to `App::shutdown`.
#[derive(Debug, Clone, Copy)]
pub struct ShutdownContext {
    deadline: Instant,
}

impl ShutdownContext {
    /// Start a countdown of `timeout` from now. Timeouts too large to
    /// represent are capped at roughly thirty years.
    pub fn new(timeout: Duration) -> Self {
        let now = Instant::now();
        let deadline = now
            .checked_add(timeout)
            .unwrap_or_else(|| now + FAR_FUTURE);
        Self { deadline }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time left before the deadline; zero once expired.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Resolves when the deadline passes.
    pub async fn expired(&self) {
        tokio::time::sleep_until(self.deadline).await;
    }
}

/// How the shutdown phase ended.
#[derive(Debug)]
pub enum Resolution {
    Completed,
    Failed(BoxError),
    ForcedExit(TermSignal),
    TimedOut(Duration),
}

impl Resolution {
    pub fn exit_code(&self) -> i32 {
        match self {
            Resolution::Completed => EXIT_SUCCESS,
            Resolution::Failed(_) | Resolution::ForcedExit(_) | Resolution::TimedOut(_) => {
                EXIT_FAILURE
            }
        }
    }
}

/// Wait for whichever ends the shutdown phase first.
pub(crate) async fn await_resolution(
    outcome: OutcomeReceiver,
    force_exit: &mut Option<Box<dyn SignalListener>>,
    ctx: ShutdownContext,
    timeout: Duration,
) -> Resolution {
    tokio::select! {
        received = outcome => match flatten(received, "shutdown") {
            Ok(()) => Resolution::Completed,
            Err(e) => Resolution::Failed(e),
        },
        signal = next_signal(force_exit) => Resolution::ForcedExit(signal),
        _ = ctx.expired() => Resolution::TimedOut(timeout),
    }
}
