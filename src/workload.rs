//! Random workloads and result verification

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{check_len, ForgeResult, VecForgeError};

/// Exponents are drawn from `[0, EXP_MAX)`
pub const EXP_MAX: i32 = 10;

/// Base values for the clamped-exp kernel and inputs for abs and sum
#[derive(Debug, Clone, PartialEq)]
pub struct Workload {
    pub values: Vec<f32>,
    pub exponents: Vec<i32>,
}

impl Workload {
    /// `n` values uniform in `[-1, 3)` with exponents in `[0, EXP_MAX)`.
    ///
    /// The same seed always yields the same workload.
    pub fn generate(n: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(n, ?seed, "generating workload");

        let values = (0..n).map(|_| rng.gen_range(-1.0f32..3.0)).collect();
        let exponents = (0..n).map(|_| rng.gen_range(0..EXP_MAX)).collect();
        Workload { values, exponents }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Fail on the first element where `|expected - actual| > epsilon`.
///
/// NaN on either side counts as a mismatch.
pub fn verify_close(expected: &[f32], actual: &[f32], epsilon: f32) -> ForgeResult<()> {
    check_len(expected.len(), actual.len())?;
    for (index, (&e, &a)) in expected.iter().zip(actual).enumerate() {
        let diff = (e - a).abs();
        if diff.is_nan() || diff > epsilon {
            return Err(VecForgeError::ResultMismatch {
                index,
                expected: e,
                actual: a,
            });
        }
    }
    Ok(())
}
