use std::env;

use crate::core::{AppError, Result};

/// Tunable knobs for the scheduling engine.
///
/// Defaults match the production behavior; the env overrides exist for
/// operational tuning and for tests that exercise small horizons.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How many extra instances to request when a one-off commitment is
    /// converted into a series. The year-end cap usually trims this down.
    pub default_extra_instances: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_extra_instances: 12,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let default_extra_instances = match env::var("COMMITRACK_DEFAULT_EXTRA_INSTANCES") {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::configuration("Invalid COMMITRACK_DEFAULT_EXTRA_INSTANCES")
            })?,
            Err(_) => defaults.default_extra_instances,
        };

        let config = Self {
            default_extra_instances,
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.default_extra_instances == 0 {
            return Err(AppError::configuration(
                "COMMITRACK_DEFAULT_EXTRA_INSTANCES must be at least 1",
            ));
        }
        Ok(())
    }
}
