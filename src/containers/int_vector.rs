//! IntVector: growable `i32` sequence with doubling growth
//!
//! Storage is a single owned boxed slice whose length is the capacity. Growth
//! allocates the next buffer up front, copies the live prefix into it and only
//! then swaps it in, so a refused allocation leaves the vector untouched.

use crate::config::{Config, VectorConfig};
use crate::error::{check_bounds, Result, VectorError};
use std::fmt;
use std::mem;
use std::ops::{Deref, Index};
use std::slice;

/// Largest capacity whose byte size still fits an allocation request.
pub const MAX_REPRESENTABLE_CAPACITY: usize = isize::MAX as usize / mem::size_of::<i32>();

/// Capacity after one growth step: 1 from empty, otherwise double.
#[inline]
fn next_capacity(cap: usize) -> Option<usize> {
    if cap == 0 {
        Some(1)
    } else {
        cap.checked_mul(2)
    }
}

#[inline]
fn byte_size(cap: usize) -> usize {
    cap.saturating_mul(mem::size_of::<i32>())
}

/// Growable vector of `i32` values
///
/// Appends are amortized O(1): whenever the buffer is full its capacity goes
/// from 0 to 1 and doubles after that. The vector never shrinks; storage is
/// returned either by dropping the value or by calling [`IntVector::release`].
///
/// Two searches are provided. [`IntVector::search_unsorted`] scans linearly
/// and works on any contents. [`IntVector::search_sorted`] is a lower-bound
/// binary search that trusts the caller to have sorted the vector first.
///
/// # Examples
///
/// ```rust
/// use int_vector::IntVector;
///
/// let mut vec = IntVector::new();
/// vec.push(3)?;
/// vec.push(1)?;
/// vec.push(4)?;
/// vec.push(1)?;
///
/// assert_eq!(vec.search_unsorted(1), 1);
/// vec.sort();
/// assert_eq!(vec.as_slice(), &[1, 1, 3, 4]);
/// assert_eq!(vec.search_sorted(5), 4);
/// # Ok::<(), int_vector::VectorError>(())
/// ```
pub struct IntVector {
    storage: Box<[i32]>,
    len: usize,
    max_capacity: usize,
}

impl IntVector {
    /// Create a new empty vector without allocating
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: Box::default(),
            len: 0,
            max_capacity: MAX_REPRESENTABLE_CAPACITY,
        }
    }

    /// Create a vector with exactly `cap` slots allocated
    pub fn with_capacity(cap: usize) -> Result<Self> {
        let mut vec = Self::new();
        if cap > 0 {
            vec.storage = vec.allocate(cap)?;
        }
        Ok(vec)
    }

    /// Create a vector from a validated configuration
    ///
    /// `initial_capacity` slots are allocated up front and growth past
    /// `max_capacity` is refused with [`VectorError::OutOfMemory`].
    pub fn with_config(config: &VectorConfig) -> Result<Self> {
        config.validate()?;
        let mut vec = Self {
            storage: Box::default(),
            len: 0,
            max_capacity: config.max_capacity,
        };
        if config.initial_capacity > 0 {
            vec.storage = vec.allocate(config.initial_capacity)?;
        }
        Ok(vec)
    }

    /// Create a vector holding a copy of `values`, grown by repeated appends
    pub fn from_slice(values: &[i32]) -> Result<Self> {
        let mut vec = Self::new();
        vec.extend_from_slice(values)?;
        Ok(vec)
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the vector has no live elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Upper bound on the capacity this vector may grow to
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// The live elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.storage[..self.len]
    }

    /// Iterate over the live elements
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    /// Element at `index`, or `None` past the end
    #[inline]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.as_slice().get(index).copied()
    }

    /// Element at `index`, or [`VectorError::OutOfBounds`] past the end
    pub fn try_get(&self, index: usize) -> Result<i32> {
        check_bounds(index, self.len)?;
        Ok(self.storage[index])
    }

    fn allocate(&self, cap: usize) -> Result<Box<[i32]>> {
        if cap > self.max_capacity {
            log::warn!(
                "IntVector refused growth to {} slots (max_capacity {})",
                cap,
                self.max_capacity
            );
            return Err(VectorError::out_of_memory(byte_size(cap)));
        }

        let mut buf: Vec<i32> = Vec::new();
        buf.try_reserve_exact(cap).map_err(|_| {
            log::warn!("IntVector allocation of {} slots failed", cap);
            VectorError::out_of_memory(byte_size(cap))
        })?;
        buf.extend_from_slice(self.as_slice());
        buf.resize(cap, 0);
        Ok(buf.into_boxed_slice())
    }

    fn grow(&mut self) -> Result<()> {
        let new_cap = next_capacity(self.capacity())
            .ok_or_else(|| VectorError::out_of_memory(usize::MAX))?;
        self.grow_to(new_cap)
    }

    /// Swap in a buffer of `new_cap` slots; the old one stays on failure.
    fn grow_to(&mut self, new_cap: usize) -> Result<()> {
        let new_storage = self.allocate(new_cap)?;
        log::trace!(
            "IntVector grow: {} -> {} slots ({} live)",
            self.capacity(),
            new_cap,
            self.len
        );
        self.storage = new_storage;
        Ok(())
    }

    /// Append `value` at the end
    ///
    /// When the buffer is full it is replaced by one of capacity 1 (from
    /// empty) or twice the current capacity, with the live elements copied
    /// over in order. If that buffer cannot be obtained the error is returned
    /// and the vector is unchanged.
    pub fn push(&mut self, value: i32) -> Result<()> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.storage[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Append every element of `values` in order
    ///
    /// Each element goes through [`IntVector::push`], so the capacity follows
    /// the same doubling sequence. On failure the elements appended before the
    /// refused growth stay in place.
    pub fn extend_from_slice(&mut self, values: &[i32]) -> Result<()> {
        for &value in values {
            self.push(value)?;
        }
        Ok(())
    }

    /// Sort the live elements into non-decreasing order
    pub fn sort(&mut self) {
        let len = self.len;
        self.storage[..len].sort_unstable();
    }

    /// Check whether the live elements are in non-decreasing order
    pub fn is_sorted(&self) -> bool {
        self.as_slice().windows(2).all(|w| w[0] <= w[1])
    }

    /// Check whether any live element equals `value`
    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.search_unsorted(value) != self.len
    }

    /// Index of the first element equal to `value`, or `len()` if absent
    pub fn search_unsorted(&self, value: i32) -> usize {
        self.iter().position(|&x| x == value).unwrap_or(self.len)
    }

    /// Lower-bound position of `value`, assuming the vector is sorted
    ///
    /// Returns the smallest index `i` such that every element before `i` is
    /// less than `value` and every element from `i` on is not. For a present
    /// value that is its leftmost occurrence; for an absent one it is the
    /// position that keeps the order on insertion.
    ///
    /// Sortedness is not checked. On unsorted contents the result is whatever
    /// the bisection arrives at, always within `0..=len()`.
    pub fn search_sorted(&self, value: i32) -> usize {
        let data = self.as_slice();
        let mut left = 0;
        let mut right = data.len();
        while left < right {
            let middle = left + (right - left) / 2;
            if data[middle] < value {
                left = middle + 1;
            } else {
                right = middle;
            }
        }
        left
    }

    /// Free the storage and consume the vector
    ///
    /// Build a fresh vector with [`IntVector::new`] to start over.
    pub fn release(self) {
        log::trace!(
            "IntVector release: {} slots ({} live)",
            self.capacity(),
            self.len
        );
    }
}

impl Default for IntVector {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for IntVector {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            len: self.len,
            max_capacity: self.max_capacity,
        }
    }
}

impl Deref for IntVector {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Index<usize> for IntVector {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a IntVector {
    type Item = &'a i32;
    type IntoIter = slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl PartialEq for IntVector {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntVector {}
