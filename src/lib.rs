//! vecforge - masked SIMD vector unit simulator
//!
//! A fixed-width vector unit with per-lane predication, an execution logger
//! that records lane occupancy for every issued instruction, and a small set
//! of kernels (absolute value, clamped power, array sum) written against it
//! together with their scalar references.

#![allow(clippy::needless_range_loop)] // Lane loops read clearer indexed

pub mod config;
pub mod error;
pub mod isa;
pub mod kernels;
pub mod logging;
pub mod profiling;
pub mod vector;
pub mod workload;

pub use config::{OutputFormat, SimConfig};
pub use error::{ErrorCategory, ForgeResult, VecForgeError};
pub use isa::VectorUnit;
pub use profiling::{ExecutionLogger, InstructionSink, SharedLogger, StatsReport};
pub use vector::{init_ones, Mask, VecReg, VECTOR_WIDTH};
pub use workload::Workload;
