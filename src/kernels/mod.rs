//! Kernels written against the vector unit
//!
//! Each vector kernel has a scalar reference with the same semantics:
//! - `abs`: absolute value, serial, vector, and rayon-parallel
//! - `exp`: clamped integer power `x^y`
//! - `sum`: array sum and the butterfly register reduction
//!
//! Vector kernels walk the input in `VECTOR_WIDTH` blocks. The trailing
//! partial block runs under an `init_ones(remaining)` mask, so any length is
//! accepted and nothing past the end of a slice is read or written.

pub mod abs;
pub mod exp;
pub mod sum;

pub use abs::{abs_serial, abs_vector, abs_vector_parallel};
pub use exp::{clamped_exp_serial, clamped_exp_vector, CLAMP_LIMIT};
pub use sum::{array_sum_serial, array_sum_vector, reduce_add};

use crate::vector::{init_ones, Mask, VECTOR_WIDTH};

/// `(base, active)` for every block covering `len` elements
pub(crate) fn blocks(len: usize) -> impl Iterator<Item = (usize, Mask)> {
    (0..len)
        .step_by(VECTOR_WIDTH)
        .map(move |base| (base, init_ones(len - base)))
}
