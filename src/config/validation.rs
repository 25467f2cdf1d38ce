//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0)
//! - Check enumerated values (role, log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Config → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::Config;
use crate::dream::Role;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("lifecycle.shutdown_timeout_secs must be greater than zero")]
    ZeroShutdownTimeout,

    #[error("app.target_role '{0}' is not supported")]
    UnknownRole(String),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.lifecycle.shutdown_timeout_secs == 0 {
        errors.push(ValidationError::ZeroShutdownTimeout);
    }

    if config.app.target_role.parse::<Role>().is_err() {
        errors.push(ValidationError::UnknownRole(config.app.target_role.clone()));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = Config::default();
        config.lifecycle.shutdown_timeout_secs = 0;
        config.app.target_role = "striker".into();
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();

        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroShutdownTimeout,
                ValidationError::UnknownRole("striker".into()),
                ValidationError::UnknownLogLevel("loud".into()),
            ]
        );
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = Config::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
