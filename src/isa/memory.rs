//! Register fill, register move, and contiguous load/store

use super::{masked_write, VectorUnit};
use crate::error::{ForgeResult, VecForgeError};
use crate::profiling::InstructionSink;
use crate::vector::{Mask, VecReg, VECTOR_WIDTH};

impl<S: InstructionSink> VectorUnit<S> {
    /// Set every active lane of `dest` to `value`
    pub fn vset<T: Copy>(&mut self, dest: &mut VecReg<T>, value: T, mask: &Mask) {
        masked_write(dest, mask, |_| value);
        self.log("vset", mask);
    }

    /// Fresh register with every lane set to `value`
    pub fn vset_all<T: Copy>(&mut self, value: T) -> VecReg<T> {
        let mut dest = VecReg::splat(value);
        self.vset(&mut dest, value, &Mask::all());
        dest
    }

    /// Copy active lanes of `src` into `dest`
    pub fn vmove<T: Copy>(&mut self, dest: &mut VecReg<T>, src: &VecReg<T>, mask: &Mask) {
        masked_write(dest, mask, |lane| src[lane]);
        self.log("vmove", mask);
    }

    /// Lane i of `dest` reads `src[i]` for every active lane.
    ///
    /// `src` starts at the caller's base offset. Only active lanes need to be
    /// backed by storage; an active lane past the end of `src` is rejected
    /// before anything is written or logged.
    pub fn vload<T: Copy>(
        &mut self,
        dest: &mut VecReg<T>,
        src: &[T],
        mask: &Mask,
    ) -> ForgeResult<()> {
        check_active_in_bounds(mask, src.len())?;
        masked_write(dest, mask, |lane| src[lane]);
        self.log("vload", mask);
        Ok(())
    }

    /// `dest[i]` receives lane i of `src` for every active lane.
    ///
    /// Same bounds rule as [`vload`](Self::vload); inactive slots of `dest`
    /// are never touched.
    pub fn vstore<T: Copy>(
        &mut self,
        dest: &mut [T],
        src: &VecReg<T>,
        mask: &Mask,
    ) -> ForgeResult<()> {
        check_active_in_bounds(mask, dest.len())?;
        for (lane, slot) in dest.iter_mut().take(VECTOR_WIDTH).enumerate() {
            if mask[lane] {
                *slot = src[lane];
            }
        }
        self.log("vstore", mask);
        Ok(())
    }
}

fn check_active_in_bounds(mask: &Mask, len: usize) -> ForgeResult<()> {
    match (len..VECTOR_WIDTH).find(|&lane| mask[lane]) {
        Some(lane) => Err(VecForgeError::StorageOutOfBounds { lane, len }),
        None => Ok(()),
    }
}
