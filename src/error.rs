//! Error handling for the int-vector library
//!
//! Every fallible operation returns [`Result`], whose error side is
//! [`VectorError`]. Allocation failure is reported rather than aborting so the
//! caller decides how to shut down, but it is never classified as recoverable.

use thiserror::Error;

/// Main error type for the int-vector library
#[derive(Error, Debug)]
pub enum VectorError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage could not be grown
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },

    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl VectorError {
    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Resource exhaustion is fatal for a container: the value that triggered
    /// the growth could not be stored.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::OutOfMemory { .. } => false,
            Self::OutOfBounds { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::OutOfMemory { .. } => "memory",
            Self::OutOfBounds { .. } => "bounds",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, VectorError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(VectorError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}
