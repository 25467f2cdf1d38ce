//! Dream narrative subsystem.
//!
//! # Data Flow
//! ```text
//! ChildhoodDream (model.rs)
//!     → TransformUseCase (usecase.rs, validates input)
//!     → Transformer (transformer.rs, dream → Adult for the target role)
//!     → Presenter (presenter.rs, builds the ViewModel and its note)
//!     → Formatter (formatter.rs, coloured or plain text)
//!     → ConsoleRunner (runner.rs, writes to the output sink)
//! ```
//!
//! # Design Decisions
//! - Value objects validate on construction and are read-only afterwards
//! - Each stage is a trait so stages can be swapped in tests
//! - Every failure is wrapped with the code of the stage that produced it

pub mod formatter;
pub mod model;
pub mod presenter;
pub mod runner;
pub mod transformer;
pub mod usecase;

pub use model::{Adult, ChildhoodDream, DreamKind, Field, Quality, Role, RoleProfile};
pub use runner::ConsoleRunner;
