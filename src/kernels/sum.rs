//! Array sum
//!
//! The vector kernel keeps a running per-lane accumulator: every block is
//! added in under its active mask, so the trailing block needs no padding.
//! The accumulator is then folded with [`reduce_add`].

use tracing::debug;

use super::blocks;
use crate::error::ForgeResult;
use crate::isa::VectorUnit;
use crate::profiling::InstructionSink;
use crate::vector::{FloatLane, VecReg, REDUCTION_ROUNDS};

pub fn array_sum_serial<T: FloatLane>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &x| acc + x)
}

/// Sum of all lanes of `v`, via `log2(VECTOR_WIDTH)` hadd+interleave rounds
pub fn reduce_add<T: FloatLane, S: InstructionSink>(unit: &mut VectorUnit<S>, v: &VecReg<T>) -> T {
    let mut acc = *v;
    let mut pairs = VecReg::default();
    for _ in 0..REDUCTION_ROUNDS {
        unit.hadd(&mut pairs, &acc);
        unit.interleave(&mut acc, &pairs);
    }
    acc[0]
}

pub fn array_sum_vector<T: FloatLane, S: InstructionSink>(
    unit: &mut VectorUnit<S>,
    values: &[T],
) -> ForgeResult<T> {
    debug!(len = values.len(), "array_sum_vector");

    let mut acc = unit.vset_all(T::zero());
    let mut block = VecReg::default();
    for (base, active) in blocks(values.len()) {
        unit.vload(&mut block, &values[base..], &active)?;
        let prev = acc;
        unit.vadd(&mut acc, &prev, &block, &active);
    }
    Ok(reduce_add(unit, &acc))
}
