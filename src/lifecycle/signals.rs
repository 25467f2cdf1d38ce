//! OS signal handling.
//!
//! # Responsibilities
//! - Register for termination signals (SIGINT, SIGTERM)
//! - Hand out scoped listeners: dropping a listener deregisters it
//! - Provide a manual source so shutdown paths can be driven without the OS
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Each shutdown stage acquires its own listener
//! - A listener only sees signals raised while it is alive

use std::fmt;
use std::io;

use async_trait::async_trait;
use tokio::sync::broadcast;

/// Termination signal observed by a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for TermSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermSignal::Interrupt => f.write_str("SIGINT"),
            TermSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Registration handle for termination signals.
#[async_trait]
pub trait SignalListener: Send {
    /// Wait for the next signal. `None` means the source is gone and no
    /// further signals will be delivered.
    async fn recv(&mut self) -> Option<TermSignal>;
}

/// Factory for signal listeners.
pub trait SignalSource: Send + Sync {
    fn listen(&self) -> io::Result<Box<dyn SignalListener>>;
}

/// Signals delivered by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSignals;

impl SignalSource for OsSignals {
    #[cfg(unix)]
    fn listen(&self) -> io::Result<Box<dyn SignalListener>> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Box::new(UnixListener {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        }))
    }

    #[cfg(not(unix))]
    fn listen(&self) -> io::Result<Box<dyn SignalListener>> {
        Ok(Box::new(CtrlCListener))
    }
}

#[cfg(unix)]
struct UnixListener {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
#[async_trait]
impl SignalListener for UnixListener {
    async fn recv(&mut self) -> Option<TermSignal> {
        tokio::select! {
            received = self.interrupt.recv() => received.map(|_| TermSignal::Interrupt),
            received = self.terminate.recv() => received.map(|_| TermSignal::Terminate),
        }
    }
}

#[cfg(not(unix))]
struct CtrlCListener;

#[cfg(not(unix))]
#[async_trait]
impl SignalListener for CtrlCListener {
    async fn recv(&mut self) -> Option<TermSignal> {
        match tokio::signal::ctrl_c().await {
            Ok(()) => Some(TermSignal::Interrupt),
            Err(e) => {
                tracing::error!(error = %e, "Failed to wait for Ctrl+C");
                None
            }
        }
    }
}

/// In-process signal source.
///
/// Every listener alive at the moment of [`ManualSignals::raise`] receives the
/// signal once; listeners created afterwards do not.
#[derive(Debug, Clone)]
pub struct ManualSignals {
    tx: broadcast::Sender<TermSignal>,
}

impl ManualSignals {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(8);
        Self { tx }
    }

    /// Deliver `signal` to all live listeners.
    pub fn raise(&self, signal: TermSignal) {
        let _ = self.tx.send(signal);
    }

    /// Number of listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ManualSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalSource for ManualSignals {
    fn listen(&self) -> io::Result<Box<dyn SignalListener>> {
        Ok(Box::new(ManualListener {
            rx: self.tx.subscribe(),
        }))
    }
}

struct ManualListener {
    rx: broadcast::Receiver<TermSignal>,
}

#[async_trait]
impl SignalListener for ManualListener {
    async fn recv(&mut self) -> Option<TermSignal> {
        loop {
            match self.rx.recv().await {
                Ok(signal) => return Some(signal),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

/// Wait on an optional listener; a missing listener never fires.
pub(crate) async fn next_signal(listener: &mut Option<Box<dyn SignalListener>>) -> TermSignal {
    match listener {
        Some(l) => match l.recv().await {
            Some(signal) => signal,
            None => std::future::pending().await,
        },
        None => std::future::pending().await,
    }
}
