//! Absolute value
//!
//! The vector version negates under the "is negative" mask and copies under
//! its complement, so both arms of the branch show up in the execution log.

use rayon::prelude::*;
use tracing::debug;

use super::blocks;
use crate::error::{check_len, ForgeResult};
use crate::isa::VectorUnit;
use crate::profiling::{InstructionSink, SharedLogger};
use crate::vector::{Lane, Mask, VecReg, VECTOR_WIDTH};

/// Blocks handed to one rayon task in [`abs_vector_parallel`]
const BLOCKS_PER_TASK: usize = 4;

pub fn abs_serial<T: Lane>(values: &[T], output: &mut [T]) -> ForgeResult<()> {
    check_len(values.len(), output.len())?;
    for (out, &x) in output.iter_mut().zip(values) {
        *out = if x < T::zero() { T::zero() - x } else { x };
    }
    Ok(())
}

pub fn abs_vector<T: Lane, S: InstructionSink>(
    unit: &mut VectorUnit<S>,
    values: &[T],
    output: &mut [T],
) -> ForgeResult<()> {
    check_len(values.len(), output.len())?;
    debug!(len = values.len(), "abs_vector");

    let zero = unit.vset_all(T::zero());
    let mut x = VecReg::default();
    let mut result = VecReg::default();

    for (base, active) in blocks(values.len()) {
        unit.vload(&mut x, &values[base..], &active)?;

        let mut negative = Mask::none();
        unit.vlt(&mut negative, &x, &zero, &active);
        unit.vsub(&mut result, &zero, &x, &negative);

        let non_negative = unit.mask_not(&negative);
        let non_negative = unit.mask_and(&non_negative, &active);
        unit.vmove(&mut result, &x, &non_negative);

        unit.vstore(&mut output[base..], &result, &active)?;
    }
    Ok(())
}

/// [`abs_vector`] split across rayon workers.
///
/// Every task drives its own vector unit; all of them log into `logger`.
/// Records from different tasks interleave in the log, the counters are
/// exact.
pub fn abs_vector_parallel<T: Lane>(
    logger: &SharedLogger,
    values: &[T],
    output: &mut [T],
) -> ForgeResult<()> {
    check_len(values.len(), output.len())?;
    let chunk = VECTOR_WIDTH * BLOCKS_PER_TASK;
    debug!(len = values.len(), chunk, "abs_vector_parallel");

    values
        .par_chunks(chunk)
        .zip(output.par_chunks_mut(chunk))
        .try_for_each(|(src, dst)| {
            let mut unit = VectorUnit::with_sink(logger.clone());
            abs_vector(&mut unit, src, dst)
        })
}
