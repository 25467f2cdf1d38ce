//! Run/shutdown orchestration.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::logger::{self, Logger};
use super::options::{LifecycleConfig, LifecycleOption};
use super::shutdown::{await_resolution, Resolution, ShutdownContext};
use super::signals::{next_signal, SignalListener, SignalSource};
use super::startup::{flatten, spawn_guarded, start_run};
use super::App;
use crate::errors::code_of;

/// Run `app` until it finishes or a termination signal arrives, then shut it
/// down within the configured timeout.
///
/// Returns the process exit code: 0 only when `App::shutdown` succeeded before
/// the timeout and before a second signal, 1 otherwise. The caller is expected
/// to exit the process with it; tasks still running are not awaited.
pub async fn run_with_graceful_shutdown<I>(app: Arc<dyn App>, options: I) -> i32
where
    I: IntoIterator<Item = LifecycleOption>,
{
    let config = LifecycleConfig::from_options(options);
    let log = logger::resolve(config.logger.clone(), &config.service_name);

    let mut first_stage = arm(config.signals.as_ref(), log.as_ref());
    let trigger = CancellationToken::new();

    log.log_line("Application starting...");

    let run_token = trigger.child_token();
    let run_outcome = start_run(app.clone(), run_token.clone());

    log.log_line("Application started.");

    tokio::select! {
        signal = next_signal(&mut first_stage) => {
            log.log_fmt(format_args!("Shutdown signal received: {}", signal));
            trigger.cancel();
        }
        received = run_outcome => {
            if let Err(e) = flatten(received, "run") {
                log.log_fmt(format_args!(
                    "Application run error: {} (code: {})",
                    e,
                    code_of(e.as_ref())
                ));
            }
            run_token.cancel();
        }
    }

    log.log_line("Application stopping...");

    let mut force_exit = arm(config.signals.as_ref(), log.as_ref());
    drop(first_stage);

    let ctx = ShutdownContext::new(config.shutdown_timeout);
    let shutdown_app = app.clone();
    let shutdown_outcome = spawn_guarded("shutdown", async move {
        shutdown_app.shutdown(ctx).await
    });

    let resolution =
        await_resolution(shutdown_outcome, &mut force_exit, ctx, config.shutdown_timeout).await;
    report(&resolution, log.as_ref());

    let code = resolution.exit_code();
    log.log_fmt(format_args!("Application stopped. exit code: {}", code));
    code
}

fn arm(signals: &dyn SignalSource, log: &dyn Logger) -> Option<Box<dyn SignalListener>> {
    match signals.listen() {
        Ok(listener) => Some(listener),
        Err(e) => {
            log.log_fmt(format_args!("Failed to install signal handler: {}", e));
            None
        }
    }
}

fn report(resolution: &Resolution, log: &dyn Logger) {
    match resolution {
        Resolution::Completed => log.log_line("Graceful shutdown complete."),
        Resolution::Failed(e) => log.log_fmt(format_args!(
            "Graceful shutdown failed: {} (code: {})",
            e,
            code_of(e.as_ref())
        )),
        Resolution::ForcedExit(signal) => log.log_fmt(format_args!(
            "Second signal received ({}). Forcing exit.",
            signal
        )),
        Resolution::TimedOut(timeout) => log.log_fmt(format_args!(
            "Shutdown timeout of {:?} exceeded. Forcing exit.",
            timeout
        )),
    }
}
