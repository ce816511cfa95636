//! Register and mask model of the simulated vector unit
//!
//! The lane width is fixed when the crate is built. It defaults to 4 lanes;
//! the `width-8` and `width-16` cargo features select wider units.
//!
//! Element types are a closed set: [`Lane`] is implemented for `f32`, `f64`,
//! `i32` and `i64`, and [`FloatLane`] (required by the cross-lane shuffles)
//! only for the two float types.

pub mod register;

pub use register::{init_ones, Mask, VecF32, VecF64, VecI32, VecI64, VecReg};

use num_traits::{Num, NumCast, Signed};
use std::fmt::Debug;

// ============================================================================
// Vector width (compile-time)
// ============================================================================

#[cfg(feature = "width-16")]
pub const VECTOR_WIDTH: usize = 16;

#[cfg(all(feature = "width-8", not(feature = "width-16")))]
pub const VECTOR_WIDTH: usize = 8;

#[cfg(not(any(feature = "width-8", feature = "width-16")))]
pub const VECTOR_WIDTH: usize = 4;

// Log records keep one bit per lane in a u64, and the hadd/interleave
// reduction needs an even power-of-two lane count.
const _: () = assert!(VECTOR_WIDTH >= 2 && VECTOR_WIDTH <= 64);
const _: () = assert!(VECTOR_WIDTH.is_power_of_two());

/// Number of hadd+interleave rounds that fold a full register into lane 0
pub const REDUCTION_ROUNDS: u32 = VECTOR_WIDTH.trailing_zeros();

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// Scalar type that can occupy a vector lane.
///
/// Arithmetic follows the host type exactly: float division by zero yields
/// infinities or NaN, integer division by zero panics.
pub trait Lane:
    sealed::Sealed + Num + Signed + NumCast + PartialOrd + Copy + Default + Debug + Send + Sync + 'static
{
}

impl Lane for f32 {}
impl Lane for f64 {}
impl Lane for i32 {}
impl Lane for i64 {}

/// Floating-point lane; only these support `hadd` and `interleave`.
pub trait FloatLane: Lane + num_traits::Float {}

impl FloatLane for f32 {}
impl FloatLane for f64 {}
