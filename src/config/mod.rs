//! Configuration APIs for int-vector
//!
//! The [`Config`] trait gives every configuration type validation,
//! environment initialization and JSON file persistence.
//!
//! # Environment Initialization
//!
//! ```rust
//! use int_vector::config::{Config, VectorConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads INTVEC_VECTOR_INITIAL_CAPACITY and INTVEC_VECTOR_MAX_CAPACITY
//! let config = VectorConfig::from_env()?;
//!
//! // Same variables under a custom prefix
//! let config = VectorConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod vector;


pub use vector::VectorConfig;

/// Environment variable prefix used by [`Config::from_env`].
pub const ENV_PREFIX: &str = "INTVEC_";

/// Common configuration trait providing validation, environment
/// initialization and file persistence.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from `INTVEC_`-prefixed environment variables.
    ///
    /// Unset variables keep their default values.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// One rejected setting found by [`Config::validate`].
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Name of the rejected setting
    pub field: String,
    /// The rejected value, as text
    pub value: String,
    /// Constraint the value breaks
    pub reason: String,
    /// Accepted values, if there is a simple way to state them
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Record a rejected `field = value` pair.
    pub fn new(field: &str, value: &str, reason: &str) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
            suggestion: None,
        }
    }

    /// Attach the accepted values.
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} rejected: {}", self.field, self.value, self.reason)?;
        match self.suggestion {
            Some(ref accepted) => write!(f, " (accepted: {})", accepted),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
