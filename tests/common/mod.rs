//! Shared helpers for the integration tests
//!
//! Everything here is width-generic: registers and masks are sized by
//! `VECTOR_WIDTH`, so the suites pass unchanged under the `width-8` and
//! `width-16` features.

#![allow(dead_code)]

use proptest::prelude::*;
use vecforge::vector::{Mask, VecF32, VecI32, VECTOR_WIDTH};

pub use serial_test::serial;

/// Mask with lane i active iff bit i of `bits` is set
pub fn mask_from_bits(bits: u64) -> Mask {
    let mut mask = Mask::none();
    for lane in 0..VECTOR_WIDTH {
        mask[lane] = bits & (1 << lane) != 0;
    }
    mask
}

/// `start, start + 1, ...` across the lanes
pub fn ramp_f32(start: f32) -> VecF32 {
    let mut reg = VecF32::default();
    for lane in 0..VECTOR_WIDTH {
        reg[lane] = start + lane as f32;
    }
    reg
}

/// Repeating integers in `[-16, 48)`; sums stay exact in f32
pub fn exact_values(n: usize) -> Vec<f32> {
    (0..n).map(|i| (i % 64) as f32 - 16.0).collect()
}

pub fn arb_mask() -> impl Strategy<Value = Mask> {
    any::<u64>().prop_map(mask_from_bits)
}

/// Small integers, so that sums and products stay exact in f32
pub fn arb_f32_reg() -> impl Strategy<Value = VecF32> {
    prop::collection::vec(-1000i32..1000, VECTOR_WIDTH).prop_map(|lanes| {
        let mut reg = VecF32::default();
        for (lane, value) in lanes.into_iter().enumerate() {
            reg[lane] = value as f32;
        }
        reg
    })
}

/// Integer register with no zero lanes, usable as a divisor
pub fn arb_nonzero_i32_reg() -> impl Strategy<Value = VecI32> {
    prop::collection::vec(prop_oneof![-500i32..-1, 1i32..500], VECTOR_WIDTH).prop_map(|lanes| {
        let mut reg = VecI32::default();
        for (lane, value) in lanes.into_iter().enumerate() {
            reg[lane] = value;
        }
        reg
    })
}
