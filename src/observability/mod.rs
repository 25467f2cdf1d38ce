//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields)
//!     → lifecycle Logger facade (plain lines, forwarded to tracing)
//!
//! Consumers:
//!     → fmt layer on stdout, filtered by EnvFilter
//! ```
//!
//! # Design Decisions
//! - One global subscriber, installed by the binary
//! - RUST_LOG overrides the configured level

pub mod logging;

pub use logging::init_logging;
