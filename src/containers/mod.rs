//! Container types
//!
//! - **`IntVector`** - growable `i32` vector with doubling growth, linear and
//!   lower-bound search, and in-place sort

mod int_vector;

pub use int_vector::{IntVector, MAX_REPRESENTABLE_CAPACITY};
