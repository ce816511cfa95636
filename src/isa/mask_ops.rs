//! Mask algebra and bit counting

use super::VectorUnit;
use crate::profiling::InstructionSink;
use crate::vector::Mask;

impl<S: InstructionSink> VectorUnit<S> {
    /// Lane-wise logical NOT
    pub fn mask_not(&mut self, mask: &Mask) -> Mask {
        let mut result = Mask::none();
        for (lane, &active) in mask.iter().enumerate() {
            result[lane] = !active;
        }
        self.log_full("masknot");
        result
    }

    /// Lane-wise logical OR
    pub fn mask_or(&mut self, a: &Mask, b: &Mask) -> Mask {
        let mut result = Mask::none();
        for (lane, (&x, &y)) in a.iter().zip(b.iter()).enumerate() {
            result[lane] = x || y;
        }
        self.log_full("maskor");
        result
    }

    /// Lane-wise logical AND
    pub fn mask_and(&mut self, a: &Mask, b: &Mask) -> Mask {
        let mut result = Mask::none();
        for (lane, (&x, &y)) in a.iter().zip(b.iter()).enumerate() {
            result[lane] = x && y;
        }
        self.log_full("maskand");
        result
    }

    /// Number of active lanes; the vector loop-termination test
    pub fn cntbits(&mut self, mask: &Mask) -> usize {
        let count = mask.count_active();
        self.log_full("cntbits");
        count
    }
}
