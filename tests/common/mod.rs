//! Shared utilities for supervisor integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use field_switcher::errors::{AppError, BoxError};
use field_switcher::lifecycle::{App, Logger, ManualSignals, ShutdownContext};
use tokio_util::sync::CancellationToken;

/// What `run` does.
pub enum RunScript {
    Succeed,
    Fail(&'static str),
    FailWith(fn() -> AppError),
    WaitForCancel,
    Panic(&'static str),
}

/// What `shutdown` does.
pub enum ShutdownScript {
    Succeed,
    Fail(&'static str),
    Sleep(Duration),
    Panic(&'static str),
}

/// Application whose behaviour is fixed up front.
pub struct ScriptedApp {
    run: RunScript,
    shutdown: ShutdownScript,
    run_cancelled: AtomicBool,
    shutdown_started: Mutex<Option<Instant>>,
}

impl ScriptedApp {
    pub fn new(run: RunScript, shutdown: ShutdownScript) -> Arc<Self> {
        Arc::new(Self {
            run,
            shutdown,
            run_cancelled: AtomicBool::new(false),
            shutdown_started: Mutex::new(None),
        })
    }

    pub fn run_cancelled(&self) -> bool {
        self.run_cancelled.load(Ordering::SeqCst)
    }

    pub fn shutdown_started_at(&self) -> Option<Instant> {
        *self.shutdown_started.lock().unwrap()
    }

    /// Wait until `shutdown` has been invoked.
    pub async fn wait_for_shutdown(&self) -> Instant {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            if let Some(at) = self.shutdown_started_at() {
                return at;
            }
            assert!(Instant::now() < deadline, "shutdown was never invoked");
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }
}

#[async_trait]
impl App for ScriptedApp {
    async fn run(&self, ctx: CancellationToken) -> Result<(), BoxError> {
        match &self.run {
            RunScript::Succeed => Ok(()),
            RunScript::Fail(msg) => Err((*msg).into()),
            RunScript::FailWith(make) => Err(make().into()),
            RunScript::WaitForCancel => {
                ctx.cancelled().await;
                self.run_cancelled.store(true, Ordering::SeqCst);
                Ok(())
            }
            RunScript::Panic(msg) => panic!("{}", msg),
        }
    }

    async fn shutdown(&self, _ctx: ShutdownContext) -> Result<(), BoxError> {
        *self.shutdown_started.lock().unwrap() = Some(Instant::now());
        match &self.shutdown {
            ShutdownScript::Succeed => Ok(()),
            ShutdownScript::Fail(msg) => Err((*msg).into()),
            ShutdownScript::Sleep(duration) => {
                tokio::time::sleep(*duration).await;
                Ok(())
            }
            ShutdownScript::Panic(msg) => panic!("{}", msg),
        }
    }
}

/// Logger that keeps every line in memory.
#[derive(Default)]
pub struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl CapturingLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().unwrap().iter().any(|l| l.contains(needle))
    }
}

impl Logger for CapturingLogger {
    fn log_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Wait until at least `count` listeners are registered on `signals`.
pub async fn wait_for_listeners(signals: &ManualSignals, count: usize) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while signals.listener_count() < count {
        assert!(Instant::now() < deadline, "signal listeners never armed");
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
}
