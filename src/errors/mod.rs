//! Application error type with machine-readable codes.
//!
//! # Data Flow
//! ```text
//! domain / adapters
//!     → AppError::validation / domain / internal (leaf errors)
//!     → AppError::wrap (adds context + code while keeping the cause)
//!     → lifecycle supervisor logs `err` and `code_of(err)`
//! ```
//!
//! # Design Decisions
//! - Codes travel with the error, not in the message
//! - `code_of` finds the first AppError in the source chain
//! - Foreign errors report `Code::Unknown`

pub mod codes;

use thiserror::Error;

pub use codes::Code;

/// Boxed error accepted at the application boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error carrying a [`Code`], a message, and an optional cause.
#[derive(Debug, Error)]
#[error("{message}{}", .source.as_ref().map(|cause| format!(": {cause}")).unwrap_or_default())]
pub struct AppError {
    code: Code,
    message: String,
    #[source]
    source: Option<BoxError>,
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(Code::Validation, message)
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(Code::DomainFailure, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Code::Internal, message)
    }

    /// Wrap `cause` with additional context under a new code.
    pub fn wrap<E>(cause: E, code: Code, message: impl Into<String>) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            code,
            message: message.into(),
            source: Some(cause.into()),
        }
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Code of the first [`AppError`] in the error's source chain.
pub fn code_of(err: &(dyn std::error::Error + 'static)) -> Code {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(app_err) = e.downcast_ref::<AppError>() {
            return app_err.code();
        }
        current = e.source();
    }
    Code::Unknown
}

pub fn is_code(err: &(dyn std::error::Error + 'static), code: Code) -> bool {
    code_of(err) == code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_cause() {
        let err = AppError::validation("field name cannot be empty");
        assert_eq!(err.to_string(), "field name cannot be empty");
        assert_eq!(err.code(), Code::Validation);
    }

    #[test]
    fn test_display_includes_cause() {
        let inner = AppError::domain("unsupported role: captain");
        let err = AppError::wrap(inner, Code::Internal, "create transformer");
        assert_eq!(
            err.to_string(),
            "create transformer: unsupported role: captain"
        );
    }

    #[test]
    fn test_code_of_returns_outermost_app_error() {
        let inner = AppError::validation("empty");
        let err = AppError::wrap(inner, Code::DomainFailure, "outer");
        assert_eq!(code_of(&err), Code::DomainFailure);
        assert!(is_code(&err, Code::DomainFailure));
    }

    #[test]
    fn test_code_of_foreign_error_is_unknown() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(code_of(&err), Code::Unknown);
    }

    #[test]
    fn test_code_of_through_boxed_error() {
        let boxed: BoxError = Box::new(AppError::internal("panic in run"));
        assert_eq!(code_of(boxed.as_ref()), Code::Internal);
    }

    #[test]
    fn test_wrap_keeps_io_cause_as_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = AppError::wrap(io, Code::Io, "failed to write output");
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "closed");
        assert_eq!(code_of(&err), Code::Io);
    }
}
