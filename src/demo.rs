//! Walkthrough of the [`IntVector`] API used by the `int-vector-demo` binary.

use crate::containers::IntVector;
use crate::error::Result;
use std::io::Write;

/// Values appended by [`run_demo`], in order.
pub const DEMO_VALUES: [i32; 4] = [3, 1, 4, 1];

/// Indices computed by [`run_demo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoIndices {
    /// `search_sorted(1)` taken before sorting. The vector is not sorted at
    /// that point, so this value carries no meaning beyond being in range.
    pub index: usize,
    /// `search_unsorted(1)` taken after sorting
    pub index2: usize,
}

/// Build a vector from [`DEMO_VALUES`], query it before and after sorting and
/// write `Index: <a>, Index2: <b>` plus a newline to `out`.
pub fn run_demo<W: Write>(out: &mut W) -> Result<DemoIndices> {
    let mut vec = IntVector::new();
    vec.extend_from_slice(&DEMO_VALUES)?;

    let index = vec.search_sorted(1);
    vec.sort();
    let index2 = vec.search_unsorted(1);

    writeln!(out, "Index: {}, Index2: {}", index, index2)?;
    out.flush()?;

    vec.release();
    Ok(DemoIndices { index, index2 })
}
