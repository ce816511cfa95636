//! Lane-utilization profiling for the simulated vector unit
//!
//! # Modules
//!
//! - [`logger`] - [`ExecutionLogger`], the [`InstructionSink`] seam and the
//!   mutex-backed [`SharedLogger`]
//! - [`record`] - immutable per-instruction log entries
//! - [`stats`] - aggregate counters and the statistics report
//!
//! # Example
//!
//! ```rust
//! use vecforge::isa::VectorUnit;
//! use vecforge::vector::{init_ones, VecF32};
//!
//! let mut unit = VectorUnit::new();
//! let mut acc = VecF32::splat(0.0);
//! let one = unit.vset_all(1.0f32);
//! unit.vadd(&mut acc, &one, &one, &init_ones(1));
//!
//! let logger = unit.into_sink();
//! println!("{}", logger.report_log());
//! println!("{}", logger.report_stats());
//! ```

pub mod logger;
pub mod record;
pub mod stats;

pub use logger::{ExecutionLogger, InstructionSink, SharedLogger};
pub use record::{InstructionName, InstructionRecord, MAX_INSTRUCTION_LEN};
pub use stats::{StatsReport, VectorStats};
