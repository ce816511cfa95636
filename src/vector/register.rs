//! Fixed-width vector registers and masks
//!
//! A [`VecReg`] is a plain `Copy` value wrapping `[T; VECTOR_WIDTH]`; copies
//! never alias. A [`Mask`] is a register of `bool` lanes and doubles as the
//! predicate input and the comparison output of instructions.

use std::ops::{Index, IndexMut};

use super::VECTOR_WIDTH;
use crate::error::{ForgeResult, VecForgeError};

/// A vector register of `VECTOR_WIDTH` lanes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VecReg<T> {
    lanes: [T; VECTOR_WIDTH],
}

/// Predicate register
pub type Mask = VecReg<bool>;

pub type VecF32 = VecReg<f32>;
pub type VecF64 = VecReg<f64>;
pub type VecI32 = VecReg<i32>;
pub type VecI64 = VecReg<i64>;

impl<T: Copy + Default> Default for VecReg<T> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T: Copy> VecReg<T> {
    /// Register with every lane set to `value`
    pub fn splat(value: T) -> Self {
        Self {
            lanes: [value; VECTOR_WIDTH],
        }
    }

    pub fn from_array(lanes: [T; VECTOR_WIDTH]) -> Self {
        Self { lanes }
    }

    /// Copy the first `VECTOR_WIDTH` elements of `values`.
    ///
    /// Returns `StorageOutOfBounds` naming the first missing lane if the
    /// slice is too short.
    pub fn from_slice(values: &[T]) -> ForgeResult<Self> {
        if values.len() < VECTOR_WIDTH {
            return Err(VecForgeError::StorageOutOfBounds {
                lane: values.len(),
                len: values.len(),
            });
        }
        let mut lanes = [values[0]; VECTOR_WIDTH];
        lanes.copy_from_slice(&values[..VECTOR_WIDTH]);
        Ok(Self { lanes })
    }

    pub fn to_array(self) -> [T; VECTOR_WIDTH] {
        self.lanes
    }

    pub fn as_array(&self) -> &[T; VECTOR_WIDTH] {
        &self.lanes
    }

    /// Checked lane read
    pub fn get(&self, lane: usize) -> ForgeResult<T> {
        self.lanes
            .get(lane)
            .copied()
            .ok_or(VecForgeError::LaneOutOfBounds {
                lane,
                width: VECTOR_WIDTH,
            })
    }

    /// Checked lane write
    pub fn set(&mut self, lane: usize, value: T) -> ForgeResult<()> {
        let slot = self
            .lanes
            .get_mut(lane)
            .ok_or(VecForgeError::LaneOutOfBounds {
                lane,
                width: VECTOR_WIDTH,
            })?;
        *slot = value;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.lanes.iter()
    }

    pub(crate) fn lanes_mut(&mut self) -> &mut [T; VECTOR_WIDTH] {
        &mut self.lanes
    }
}

impl<T> Index<usize> for VecReg<T> {
    type Output = T;

    fn index(&self, lane: usize) -> &T {
        &self.lanes[lane]
    }
}

impl<T> IndexMut<usize> for VecReg<T> {
    fn index_mut(&mut self, lane: usize) -> &mut T {
        &mut self.lanes[lane]
    }
}

impl<'a, T> IntoIterator for &'a VecReg<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.lanes.iter()
    }
}

/// Mask with lanes `[0, first)` active; `first` saturates at the width.
pub fn init_ones(first: usize) -> Mask {
    Mask::init_ones(first)
}

impl VecReg<bool> {
    /// Mask with lanes `[0, first)` active; `first` saturates at the width.
    pub fn init_ones(first: usize) -> Self {
        let mut lanes = [false; VECTOR_WIDTH];
        for (lane, active) in lanes.iter_mut().enumerate() {
            *active = lane < first;
        }
        Self { lanes }
    }

    pub fn all() -> Self {
        Self::init_ones(VECTOR_WIDTH)
    }

    pub fn none() -> Self {
        Self::init_ones(0)
    }

    /// Number of active lanes
    pub fn count_active(&self) -> usize {
        self.lanes.iter().filter(|&&active| active).count()
    }

    pub fn is_all(&self) -> bool {
        self.lanes.iter().all(|&active| active)
    }

    pub fn is_none(&self) -> bool {
        !self.lanes.iter().any(|&active| active)
    }

    /// Bit i set iff lane i is active, for lanes `[0, lanes)`
    pub fn to_bits(&self, lanes: usize) -> u64 {
        self.lanes
            .iter()
            .take(lanes)
            .enumerate()
            .filter(|(_, active)| **active)
            .fold(0u64, |bits, (lane, _)| bits | (1u64 << lane))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_ones_prefix() {
        for k in 0..=VECTOR_WIDTH {
            let mask = Mask::init_ones(k);
            for lane in 0..VECTOR_WIDTH {
                assert_eq!(mask[lane], lane < k, "k={} lane={}", k, lane);
            }
            assert_eq!(mask.count_active(), k);
        }
        assert!(Mask::init_ones(0).is_none());
        assert!(Mask::init_ones(VECTOR_WIDTH).is_all());
    }

    #[test]
    fn test_init_ones_saturates() {
        assert_eq!(Mask::init_ones(VECTOR_WIDTH + 3), Mask::all());
    }

    #[test]
    fn test_value_semantics() {
        let mut a = VecI32::splat(7);
        let b = a;
        a[0] = -1;
        assert_eq!(b[0], 7);
        assert_eq!(a[0], -1);
    }

    #[test]
    fn test_checked_access() {
        let mut reg = VecF32::splat(1.5);
        assert_eq!(reg.get(VECTOR_WIDTH - 1).unwrap(), 1.5);
        assert!(matches!(
            reg.get(VECTOR_WIDTH),
            Err(VecForgeError::LaneOutOfBounds { lane, width }) if lane == VECTOR_WIDTH && width == VECTOR_WIDTH
        ));

        reg.set(0, 3.0).unwrap();
        assert_eq!(reg[0], 3.0);
        assert!(reg.set(VECTOR_WIDTH, 0.0).is_err());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let reg = VecI64::default();
        let _ = reg[VECTOR_WIDTH];
    }

    #[test]
    fn test_from_slice() {
        let values: Vec<f32> = (0..VECTOR_WIDTH + 2).map(|i| i as f32).collect();
        let reg = VecF32::from_slice(&values).unwrap();
        assert_eq!(reg[VECTOR_WIDTH - 1], (VECTOR_WIDTH - 1) as f32);

        assert!(VecF32::from_slice(&values[..VECTOR_WIDTH - 1]).is_err());
    }

    #[test]
    fn test_to_bits() {
        let mask = Mask::init_ones(2);
        assert_eq!(mask.to_bits(VECTOR_WIDTH), 0b11);
        assert_eq!(mask.to_bits(1), 0b1);
        assert_eq!(mask.to_bits(0), 0);
        assert_eq!(Mask::all().to_bits(VECTOR_WIDTH).count_ones() as usize, VECTOR_WIDTH);
    }
}
