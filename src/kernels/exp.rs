//! Clamped integer power
//!
//! `output[i] = min(values[i] ^ exponents[i], CLAMP_LIMIT)` computed by
//! repeated multiplication, with `x^0 == 1`. Exponents below one leave the
//! base unchanged. Both versions multiply in the same order, so their
//! results are bit-identical.

use tracing::debug;

use super::blocks;
use crate::error::{check_len, ForgeResult};
use crate::isa::VectorUnit;
use crate::profiling::InstructionSink;
use crate::vector::{Mask, VecF32, VecI32};

/// Upper bound applied to every result
pub const CLAMP_LIMIT: f32 = 9.999_999;

pub fn clamped_exp_serial(values: &[f32], exponents: &[i32], output: &mut [f32]) -> ForgeResult<()> {
    check_len(values.len(), exponents.len())?;
    check_len(values.len(), output.len())?;

    for ((out, &x), &y) in output.iter_mut().zip(values).zip(exponents) {
        if y == 0 {
            *out = 1.0;
            continue;
        }
        let mut result = x;
        let mut count = y - 1;
        while count > 0 {
            result *= x;
            count -= 1;
        }
        if result > CLAMP_LIMIT {
            result = CLAMP_LIMIT;
        }
        *out = result;
    }
    Ok(())
}

pub fn clamped_exp_vector<S: InstructionSink>(
    unit: &mut VectorUnit<S>,
    values: &[f32],
    exponents: &[i32],
    output: &mut [f32],
) -> ForgeResult<()> {
    check_len(values.len(), exponents.len())?;
    check_len(values.len(), output.len())?;
    debug!(len = values.len(), "clamped_exp_vector");

    let zero = unit.vset_all(0i32);
    let one = unit.vset_all(1i32);
    let clamp = unit.vset_all(CLAMP_LIMIT);

    let mut x = VecF32::default();
    let mut y = VecI32::default();
    let mut result = VecF32::default();
    let mut count = VecI32::default();

    for (base, active) in blocks(values.len()) {
        unit.vload(&mut x, &values[base..], &active)?;
        unit.vload(&mut y, &exponents[base..], &active)?;

        let mut is_zero = Mask::none();
        unit.veq(&mut is_zero, &y, &zero, &active);
        unit.vset(&mut result, 1.0, &is_zero);

        let not_zero = unit.mask_not(&is_zero);
        let not_zero = unit.mask_and(&not_zero, &active);
        unit.vmove(&mut result, &x, &not_zero);
        unit.vsub(&mut count, &y, &one, &not_zero);

        let mut looping = Mask::none();
        unit.vgt(&mut looping, &count, &zero, &not_zero);
        let mut rounds = 0usize;
        while unit.cntbits(&looping) > 0 {
            let prev = result;
            unit.vmult(&mut result, &prev, &x, &looping);
            let prev = count;
            unit.vsub(&mut count, &prev, &one, &looping);
            let prev = looping;
            unit.vgt(&mut looping, &count, &zero, &prev);
            rounds += 1;
        }

        let mut exceeds = Mask::none();
        unit.vgt(&mut exceeds, &result, &clamp, &not_zero);
        unit.vset(&mut result, CLAMP_LIMIT, &exceeds);

        unit.vstore(&mut output[base..], &result, &active)?;
        debug!(base, rounds, clamped = exceeds.count_active(), "exp block");
    }
    Ok(())
}
