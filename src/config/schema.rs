//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for field-switcher.
//! All types derive Serde traits for deserialization from TOML files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::lifecycle::{with_service_name, with_shutdown_timeout, LifecycleOption};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Supervisor settings.
    pub lifecycle: LifecycleSettings,

    /// Narrative rendering settings.
    pub app: AppSettings,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Supervisor configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LifecycleSettings {
    /// Bound on the graceful shutdown phase in seconds.
    pub shutdown_timeout_secs: u64,

    /// Prefix for lifecycle log lines (empty disables it).
    pub service_name: String,
}

impl Default for LifecycleSettings {
    fn default() -> Self {
        Self {
            shutdown_timeout_secs: 30,
            service_name: "field-switcher".to_string(),
        }
    }
}

impl LifecycleSettings {
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    /// Supervisor options equivalent to these settings.
    pub fn options(&self) -> Vec<LifecycleOption> {
        vec![
            with_shutdown_timeout(self.shutdown_timeout()),
            with_service_name(self.service_name.clone()),
        ]
    }
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Role the dream turns into (`team_lead` or `developer`).
    pub target_role: String,

    /// Emit ANSI colours.
    pub color: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            target_role: "team_lead".to_string(),
            color: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
