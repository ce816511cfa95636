//! Cross-lane float shuffles used for reductions
//!
//! `hadd` followed by `interleave`, repeated `log2(VECTOR_WIDTH)` times,
//! folds the sum of all lanes into lane 0 without any scratch storage.

use super::VectorUnit;
use crate::profiling::InstructionSink;
use crate::vector::{FloatLane, VecReg, VECTOR_WIDTH};

impl<S: InstructionSink> VectorUnit<S> {
    /// Pairwise adjacent sum: `[a b c d] -> [a+b a+b c+d c+d]`
    ///
    /// Applies to every pair. Unmasked and not recorded by the logger.
    pub fn hadd<T: FloatLane>(&mut self, dest: &mut VecReg<T>, src: &VecReg<T>) {
        for pair in 0..VECTOR_WIDTH / 2 {
            let sum = src[2 * pair] + src[2 * pair + 1];
            dest[2 * pair] = sum;
            dest[2 * pair + 1] = sum;
        }
    }

    /// Even lanes to the front half, odd lanes to the back half:
    /// `[0 1 2 3 4 5 6 7] -> [0 2 4 6 1 3 5 7]`
    pub fn interleave<T: FloatLane>(&mut self, dest: &mut VecReg<T>, src: &VecReg<T>) {
        let half = VECTOR_WIDTH / 2;
        for lane in 0..VECTOR_WIDTH {
            let from = if lane < half {
                2 * lane
            } else {
                2 * (lane - half) + 1
            };
            dest[lane] = src[from];
        }
    }
}
