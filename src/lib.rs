//! field-switcher: a graceful-shutdown supervisor and the console
//! application it drives.

pub mod app;
pub mod config;
pub mod dream;
pub mod errors;
pub mod lifecycle;
pub mod observability;

pub use app::FieldSwitcher;
pub use config::Config;
pub use errors::{AppError, BoxError, Code};
pub use lifecycle::{run_with_graceful_shutdown, App};
