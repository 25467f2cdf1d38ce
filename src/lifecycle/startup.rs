//! Startup of the supervised work.
//!
//! # Responsibilities
//! - Spawn the application's work on its own task
//! - Convert a panic inside that task into an ordinary error
//! - Deliver exactly one outcome through a single-slot channel
//!
//! # Design Decisions
//! - The outcome channel is a oneshot: no loss if nobody is listening yet,
//!   at most one observation
//! - Spawned tasks are never joined; an abandoned task dies with the process

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use super::App;
use crate::errors::{AppError, BoxError};

/// Result produced by `run` or `shutdown`.
pub type Outcome = Result<(), BoxError>;

/// Receiving side of a single-slot outcome channel.
pub type OutcomeReceiver = oneshot::Receiver<Outcome>;

/// Spawn `work` and report its outcome on the returned channel.
///
/// A panic inside `work` is reported as an `INTERNAL` error mentioning `label`.
pub fn spawn_guarded<F>(label: &'static str, work: F) -> OutcomeReceiver
where
    F: Future<Output = Outcome> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = match AssertUnwindSafe(work).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(payload) => Err(AppError::internal(format!(
                "panic in {}: {}",
                label,
                panic_message(payload.as_ref())
            ))
            .into()),
        };
        // Receiver gone means the supervisor already resolved.
        let _ = tx.send(outcome);
    });
    rx
}

/// Launch `App::run` against `token`.
pub fn start_run(app: Arc<dyn App>, token: CancellationToken) -> OutcomeReceiver {
    spawn_guarded("run", async move { app.run(token).await })
}

/// Turn a receive failure into an outcome. The sender only disappears
/// without sending when the task was torn down by the runtime.
pub fn flatten(received: Result<Outcome, oneshot::error::RecvError>, label: &str) -> Outcome {
    received.unwrap_or_else(|_| {
        Err(AppError::internal(format!("{} task ended without reporting an outcome", label)).into())
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{code_of, Code};

    #[tokio::test]
    async fn test_outcome_delivered_once() {
        let rx = spawn_guarded("run", async { Ok(()) });
        assert!(flatten(rx.await, "run").is_ok());
    }

    #[tokio::test]
    async fn test_outcome_kept_until_received() {
        let rx = spawn_guarded("run", async { Err::<(), BoxError>("boom".into()) });
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        let err = flatten(rx.await, "run").unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let rx = spawn_guarded("run", async {
            if true {
                panic!("exploded");
            }
            Ok(())
        });

        let err = flatten(rx.await, "run").unwrap_err();
        assert_eq!(err.to_string(), "panic in run: exploded");
        assert_eq!(code_of(err.as_ref()), Code::Internal);
    }

    #[tokio::test]
    async fn test_formatted_panic_message() {
        let value = 7;
        let rx = spawn_guarded("shutdown", async move {
            if value > 0 {
                panic!("bad value {}", value);
            }
            Ok(())
        });

        let err = flatten(rx.await, "shutdown").unwrap_err();
        assert_eq!(err.to_string(), "panic in shutdown: bad value 7");
    }
}
