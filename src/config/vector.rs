//! Growth limits for [`IntVector`](crate::IntVector).

use super::{parse_env_var, Config, ValidationError};
use crate::containers::MAX_REPRESENTABLE_CAPACITY;
use crate::error::{Result, VectorError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Allocation settings applied by [`IntVector::with_config`](crate::IntVector::with_config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorConfig {
    /// Slots allocated when the vector is created
    pub initial_capacity: usize,

    /// Largest capacity the vector may grow to; a doubling step that would
    /// pass it fails with an out-of-memory error
    pub max_capacity: usize,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            max_capacity: MAX_REPRESENTABLE_CAPACITY,
        }
    }
}

impl VectorConfig {
    /// No up-front allocation, capped at `max_capacity` slots.
    pub fn compact_preset(max_capacity: usize) -> Self {
        Self {
            initial_capacity: 0,
            max_capacity,
        }
    }

    /// Pre-allocate `initial_capacity` slots, no cap beyond the platform limit.
    pub fn preallocated_preset(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_capacity: MAX_REPRESENTABLE_CAPACITY,
        }
    }
}

impl Config for VectorConfig {
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.max_capacity == 0 {
            errors.push(
                ValidationError::new(
                    "max_capacity",
                    &self.max_capacity.to_string(),
                    "maximum capacity must allow at least one element",
                )
                .with_suggestion("any value >= 1"),
            );
        }

        if self.max_capacity > MAX_REPRESENTABLE_CAPACITY {
            errors.push(ValidationError::new(
                "max_capacity",
                &self.max_capacity.to_string(),
                "maximum capacity exceeds the largest allocatable buffer",
            ));
        }

        if self.initial_capacity > self.max_capacity {
            errors.push(ValidationError::new(
                "initial_capacity",
                &self.initial_capacity.to_string(),
                "initial capacity must not exceed maximum capacity",
            ));
        }

        if !errors.is_empty() {
            return Err(VectorError::configuration(format!(
                "Vector configuration validation failed: {}",
                errors
                    .into_iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ")
            )));
        }

        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();

        config.initial_capacity = parse_env_var(
            &format!("{}VECTOR_INITIAL_CAPACITY", prefix),
            config.initial_capacity,
        );
        config.max_capacity = parse_env_var(
            &format!("{}VECTOR_MAX_CAPACITY", prefix),
            config.max_capacity,
        );

        log::debug!("Vector configuration from environment ({}): {:?}", prefix, config);
        config.validate()?;
        Ok(config)
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            VectorError::configuration(format!("Failed to serialize vector config: {}", e))
        })?;

        std::fs::write(path, serialized).map_err(|e| {
            VectorError::configuration(format!("Failed to write vector config file: {}", e))
        })?;

        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            VectorError::configuration(format!("Failed to read vector config file: {}", e))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            VectorError::configuration(format!("Failed to parse vector config file: {}", e))
        })?;

        log::debug!("Vector configuration loaded: {:?}", config);
        config.validate()?;
        Ok(config)
    }
}
