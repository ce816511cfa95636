//! Relational instructions writing into a mask

use super::{masked_write, VectorUnit};
use crate::profiling::InstructionSink;
use crate::vector::{Lane, Mask, VecReg};

impl<S: InstructionSink> VectorUnit<S> {
    /// `dest = a > b` on active lanes
    pub fn vgt<T: Lane>(&mut self, dest: &mut Mask, a: &VecReg<T>, b: &VecReg<T>, mask: &Mask) {
        masked_write(dest, mask, |lane| a[lane] > b[lane]);
        self.log("vgt", mask);
    }

    /// `dest = a < b` on active lanes
    pub fn vlt<T: Lane>(&mut self, dest: &mut Mask, a: &VecReg<T>, b: &VecReg<T>, mask: &Mask) {
        masked_write(dest, mask, |lane| a[lane] < b[lane]);
        self.log("vlt", mask);
    }

    /// `dest = a == b` on active lanes
    pub fn veq<T: Lane>(&mut self, dest: &mut Mask, a: &VecReg<T>, b: &VecReg<T>, mask: &Mask) {
        masked_write(dest, mask, |lane| a[lane] == b[lane]);
        self.log("veq", mask);
    }
}
