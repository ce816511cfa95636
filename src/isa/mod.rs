//! Masked vector instruction set
//!
//! Every instruction is a method on [`VectorUnit`], the execution context
//! that carries the instruction sink. The shared contract:
//!
//! - lanes whose mask bit is set receive the instruction's result;
//! - lanes whose mask bit is clear keep their previous value, so both arms
//!   of an `if`/`else` can run under complementary masks;
//! - each masked instruction logs exactly one record with its name and mask.
//!
//! Operands are read before the destination is written. Registers are
//! `Copy`, so an in-place update passes a copy of the destination:
//!
//! ```rust
//! use vecforge::isa::VectorUnit;
//! use vecforge::vector::{Mask, VecF32};
//!
//! let mut unit = VectorUnit::new();
//! let x = VecF32::splat(3.0);
//! let mut result = VecF32::splat(2.0);
//! let prev = result;
//! unit.vmult(&mut result, &prev, &x, &Mask::all());
//! assert_eq!(result[0], 6.0);
//! ```
//!
//! `hadd` and `interleave` are the exception: they always act on every lane,
//! only accept float registers, and are not logged.

mod arith;
mod compare;
mod mask_ops;
mod memory;
mod shuffle;

use crate::profiling::{ExecutionLogger, InstructionSink};
use crate::vector::{Mask, VecReg, VECTOR_WIDTH};

/// Execution context issuing instructions into an [`InstructionSink`]
#[derive(Debug, Clone, Default)]
pub struct VectorUnit<S: InstructionSink = ExecutionLogger> {
    sink: S,
}

impl VectorUnit<ExecutionLogger> {
    /// Vector unit with a fresh, owned execution logger
    pub fn new() -> Self {
        Self::with_sink(ExecutionLogger::new())
    }
}

impl<S: InstructionSink> VectorUnit<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Free-form annotation: appears in the log, never in the statistics
    pub fn add_user_log(&mut self, text: &str) {
        self.sink.record(text, &Mask::all(), 0);
    }

    fn log(&mut self, name: &str, mask: &Mask) {
        self.sink.record(name, mask, VECTOR_WIDTH);
    }

    /// Whole-register instructions count every lane as active
    fn log_full(&mut self, name: &str) {
        self.log(name, &Mask::all());
    }
}

/// Write `f(lane)` into every active lane of `dest`
fn masked_write<T: Copy>(dest: &mut VecReg<T>, mask: &Mask, mut f: impl FnMut(usize) -> T) {
    for (lane, slot) in dest.lanes_mut().iter_mut().enumerate() {
        if mask[lane] {
            *slot = f(lane);
        }
    }
}
