//! Top-level citemap configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ReportConfig, TraversalConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CITEMAP_*`)
/// 2. Project config (`citemap.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CitemapConfig {
    pub traversal: TraversalConfig,
    pub report: ReportConfig,
}

impl CitemapConfig {
    /// Load configuration with 3-layer resolution.
    /// Missing project config is not an error; unknown keys are ignored.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("citemap.toml");
        if project_config_path.exists() {
            let content =
                std::fs::read_to_string(&project_config_path).map_err(|_| {
                    ConfigError::FileNotFound {
                        path: project_config_path.display().to_string(),
                    }
                })?;
            config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `CITEMAP_TRAVERSAL_MAX_DEPTH`, `CITEMAP_TRAVERSAL_APEX_COURT`,
    /// `CITEMAP_REPORT_DONATE`.
    fn apply_env_overrides(config: &mut CitemapConfig) {
        if let Ok(val) = std::env::var("CITEMAP_TRAVERSAL_MAX_DEPTH") {
            if let Ok(v) = val.parse::<u32>() {
                config.traversal.max_depth = v;
            }
        }
        if let Ok(val) = std::env::var("CITEMAP_TRAVERSAL_APEX_COURT") {
            config.traversal.apex_court = val;
        }
        if let Ok(val) = std::env::var("CITEMAP_REPORT_DONATE") {
            config.report.donate = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &CitemapConfig) -> Result<(), ConfigError> {
        if config.traversal.max_depth == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "traversal.max_depth".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.traversal.apex_court.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "traversal.apex_court".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.report.donate.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "report.donate".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
