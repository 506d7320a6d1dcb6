//! # int-vector: growable integer vector
//!
//! A single container, [`IntVector`], holding `i32` values in one owned
//! buffer. Capacity starts at zero, becomes 1 on the first append and doubles
//! every time the buffer fills, which keeps appends amortized O(1).
//!
//! ## Operations
//!
//! - **Append**: [`IntVector::push`], fails with [`VectorError::OutOfMemory`]
//!   instead of aborting when the next buffer cannot be obtained
//! - **Linear search**: [`IntVector::search_unsorted`], first match or `len()`
//! - **Sort**: [`IntVector::sort`], in place, non-decreasing
//! - **Lower-bound search**: [`IntVector::search_sorted`], only meaningful
//!   once the vector is sorted
//! - **Release**: [`IntVector::release`] consumes the vector
//!
//! ## Quick Start
//!
//! ```rust
//! use int_vector::IntVector;
//!
//! let mut vec = IntVector::new();
//! for value in [3, 1, 4, 1] {
//!     vec.push(value)?;
//! }
//!
//! vec.sort();
//! assert_eq!(vec.search_unsorted(1), 0);
//! assert_eq!(vec.search_sorted(0), 0);
//! assert_eq!(vec.search_sorted(5), vec.len());
//! vec.release();
//! # Ok::<(), int_vector::VectorError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod containers;
pub mod demo;
pub mod error;

pub use config::{Config, VectorConfig};
pub use containers::IntVector;
pub use error::{Result, VectorError};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (logs the version, no other side effects)
pub fn init() {
    log::debug!("Initializing int-vector v{}", VERSION);
}
