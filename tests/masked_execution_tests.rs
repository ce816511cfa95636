//! Masked-write, full-mask equivalence and mask algebra properties

mod common;

use common::{arb_f32_reg, arb_mask, arb_nonzero_i32_reg, mask_from_bits, ramp_f32};
use proptest::prelude::*;
use vecforge::isa::VectorUnit;
use vecforge::vector::{init_ones, Mask, VecF32, VecI32, VECTOR_WIDTH};

/// Every lane is either the computed value (active) or the old one
fn assert_masked<T: PartialEq + std::fmt::Debug + Copy>(
    before: &vecforge::VecReg<T>,
    after: &vecforge::VecReg<T>,
    mask: &Mask,
    expected: impl Fn(usize) -> T,
) {
    for lane in 0..VECTOR_WIDTH {
        if mask[lane] {
            assert_eq!(after[lane], expected(lane), "active lane {}", lane);
        } else {
            assert_eq!(after[lane], before[lane], "inactive lane {}", lane);
        }
    }
}

proptest! {
    #[test]
    fn prop_arith_masked_write(
        a in arb_f32_reg(),
        b in arb_f32_reg(),
        old in arb_f32_reg(),
        mask in arb_mask()
    ) {
        let mut unit = VectorUnit::new();

        let mut dest = old;
        unit.vadd(&mut dest, &a, &b, &mask);
        assert_masked(&old, &dest, &mask, |i| a[i] + b[i]);

        let mut dest = old;
        unit.vsub(&mut dest, &a, &b, &mask);
        assert_masked(&old, &dest, &mask, |i| a[i] - b[i]);

        let mut dest = old;
        unit.vmult(&mut dest, &a, &b, &mask);
        assert_masked(&old, &dest, &mask, |i| a[i] * b[i]);

        let mut dest = old;
        unit.vabs(&mut dest, &a, &mask);
        assert_masked(&old, &dest, &mask, |i| a[i].abs());

        let mut dest = old;
        unit.vmove(&mut dest, &a, &mask);
        assert_masked(&old, &dest, &mask, |i| a[i]);

        let mut dest = old;
        unit.vset(&mut dest, 0.5, &mask);
        assert_masked(&old, &dest, &mask, |_| 0.5);
    }

    #[test]
    fn prop_integer_division_masked_write(
        a in arb_nonzero_i32_reg(),
        b in arb_nonzero_i32_reg(),
        mask in arb_mask()
    ) {
        let mut unit = VectorUnit::new();
        let old = VecI32::splat(-99);
        let mut dest = old;
        unit.vdiv(&mut dest, &a, &b, &mask);
        assert_masked(&old, &dest, &mask, |i| a[i] / b[i]);
    }

    #[test]
    fn prop_compare_masked_write(
        a in arb_f32_reg(),
        b in arb_f32_reg(),
        old in arb_mask(),
        mask in arb_mask()
    ) {
        let mut unit = VectorUnit::new();

        let mut dest = old;
        unit.vgt(&mut dest, &a, &b, &mask);
        assert_masked(&old, &dest, &mask, |i| a[i] > b[i]);

        let mut dest = old;
        unit.vlt(&mut dest, &a, &b, &mask);
        assert_masked(&old, &dest, &mask, |i| a[i] < b[i]);

        let mut dest = old;
        unit.veq(&mut dest, &a, &b, &mask);
        assert_masked(&old, &dest, &mask, |i| a[i] == b[i]);
    }

    #[test]
    fn prop_load_store_masked(values in arb_f32_reg(), mask in arb_mask()) {
        let mut unit = VectorUnit::new();
        let storage = values.to_array();

        let old = VecF32::splat(-1.0);
        let mut dest = old;
        unit.vload(&mut dest, &storage, &mask).unwrap();
        assert_masked(&old, &dest, &mask, |i| storage[i]);

        let mut out = vec![7.0f32; VECTOR_WIDTH];
        unit.vstore(&mut out, &values, &mask).unwrap();
        for lane in 0..VECTOR_WIDTH {
            let expected = if mask[lane] { values[lane] } else { 7.0 };
            prop_assert_eq!(out[lane], expected);
        }
    }

    #[test]
    fn prop_mask_algebra(m in arb_mask(), n in arb_mask()) {
        let mut unit = VectorUnit::new();

        let not_m = unit.mask_not(&m);
        prop_assert_eq!(unit.mask_not(&not_m), m);
        prop_assert!(unit.mask_and(&m, &not_m).is_none());
        prop_assert!(unit.mask_or(&m, &not_m).is_all());

        // De Morgan
        let or = unit.mask_or(&m, &n);
        let lhs = unit.mask_not(&or);
        let not_n = unit.mask_not(&n);
        let rhs = unit.mask_and(&not_m, &not_n);
        prop_assert_eq!(lhs, rhs);

        prop_assert_eq!(unit.cntbits(&m) + unit.cntbits(&not_m), VECTOR_WIDTH);
    }

    #[test]
    fn prop_complementary_masks_compose(a in arb_f32_reg(), b in arb_f32_reg(), mask in arb_mask()) {
        // if/else under m and not m equals a select
        let mut unit = VectorUnit::new();
        let mut dest = VecF32::default();
        unit.vmove(&mut dest, &a, &mask);
        let other = unit.mask_not(&mask);
        unit.vmove(&mut dest, &b, &other);
        for lane in 0..VECTOR_WIDTH {
            let expected = if mask[lane] { a[lane] } else { b[lane] };
            prop_assert_eq!(dest[lane], expected);
        }
    }
}

#[test]
fn test_full_mask_equivalence() {
    let mut unit = VectorUnit::new();
    let a = ramp_f32(-2.0);
    let b = ramp_f32(0.5);
    let all = Mask::all();

    let mut sum = VecF32::default();
    let mut product = VecF32::default();
    let mut quotient = VecF32::default();
    unit.vadd(&mut sum, &a, &b, &all);
    unit.vmult(&mut product, &a, &b, &all);
    unit.vdiv(&mut quotient, &a, &b, &all);

    for lane in 0..VECTOR_WIDTH {
        assert_eq!(sum[lane], a[lane] + b[lane]);
        assert_eq!(product[lane], a[lane] * b[lane]);
        assert_eq!(quotient[lane], a[lane] / b[lane]);
    }
}

#[test]
fn test_init_ones_every_prefix() {
    for k in 0..=VECTOR_WIDTH {
        let mask = init_ones(k);
        assert_eq!(mask.count_active(), k);
        assert_eq!(mask, mask_from_bits((1u64 << k) - 1));
    }
}

#[test]
fn test_empty_mask_changes_nothing() {
    let mut unit = VectorUnit::new();
    let a = ramp_f32(1.0);
    let old = VecF32::splat(3.0);
    let mut dest = old;
    unit.vadd(&mut dest, &a, &a, &Mask::none());
    assert_eq!(dest, old);

    // Still one counted instruction, with zero utilized lanes
    let stats = unit.sink().stats();
    assert_eq!(stats.total_instructions, 1);
    assert_eq!(stats.utilized_lanes, 0);
    assert_eq!(stats.total_lanes, VECTOR_WIDTH as u64);
}
