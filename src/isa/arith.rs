//! Lane-wise arithmetic
//!
//! Results follow the host type: float overflow and division produce
//! infinities or NaN, and integer division by zero panics just like `/`.

use num_traits::Signed;

use super::{masked_write, VectorUnit};
use crate::profiling::InstructionSink;
use crate::vector::{Lane, Mask, VecReg};

impl<S: InstructionSink> VectorUnit<S> {
    /// `dest = a + b` on active lanes
    pub fn vadd<T: Lane>(&mut self, dest: &mut VecReg<T>, a: &VecReg<T>, b: &VecReg<T>, mask: &Mask) {
        masked_write(dest, mask, |lane| a[lane] + b[lane]);
        self.log("vadd", mask);
    }

    /// `dest = a - b` on active lanes
    pub fn vsub<T: Lane>(&mut self, dest: &mut VecReg<T>, a: &VecReg<T>, b: &VecReg<T>, mask: &Mask) {
        masked_write(dest, mask, |lane| a[lane] - b[lane]);
        self.log("vsub", mask);
    }

    /// `dest = a * b` on active lanes
    pub fn vmult<T: Lane>(&mut self, dest: &mut VecReg<T>, a: &VecReg<T>, b: &VecReg<T>, mask: &Mask) {
        masked_write(dest, mask, |lane| a[lane] * b[lane]);
        self.log("vmult", mask);
    }

    /// `dest = a / b` on active lanes
    ///
    /// # Panics
    ///
    /// For integer lanes, if an active lane of `b` is zero.
    pub fn vdiv<T: Lane>(&mut self, dest: &mut VecReg<T>, a: &VecReg<T>, b: &VecReg<T>, mask: &Mask) {
        masked_write(dest, mask, |lane| a[lane] / b[lane]);
        self.log("vdiv", mask);
    }

    /// `dest = |a|` on active lanes
    pub fn vabs<T: Lane>(&mut self, dest: &mut VecReg<T>, a: &VecReg<T>, mask: &Mask) {
        masked_write(dest, mask, |lane| Signed::abs(&a[lane]));
        self.log("vabs", mask);
    }
}
