//! Execution logger observing every issued instruction
//!
//! [`ExecutionLogger`] owns the ordered record list and the aggregate
//! counters. Instructions reach it through the [`InstructionSink`] trait so a
//! vector unit can log either into a logger it owns (single-threaded) or into
//! a [`SharedLogger`] that serializes appends from several workers.

use std::fmt::Write as _;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::trace;

use super::record::{InstructionName, InstructionRecord};
use super::stats::{StatsReport, VectorStats};
use crate::error::ForgeResult;
use crate::vector::{Mask, VECTOR_WIDTH};

/// Destination for instruction records
pub trait InstructionSink {
    /// Record one instruction issue.
    ///
    /// `lanes` is the lane count the instruction declares. Only the first
    /// `lanes` lanes of `mask` are considered; `lanes == 0` appends an
    /// annotation that leaves every counter untouched.
    fn record(&mut self, name: &str, mask: &Mask, lanes: usize);
}

/// Ordered instruction log plus aggregate statistics
#[derive(Debug, Clone, Default)]
pub struct ExecutionLogger {
    records: Vec<InstructionRecord>,
    stats: VectorStats,
}

impl ExecutionLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[InstructionRecord] {
        &self.records
    }

    pub fn stats(&self) -> VectorStats {
        self.stats
    }

    pub fn report_stats(&self) -> StatsReport {
        self.stats.report()
    }

    /// Lane occupancy table, one row per record in issue order
    pub fn report_log(&self) -> String {
        let mut out = String::new();
        out.push_str("***************** Vector Unit Execution Log *****************\n");
        out.push_str(" Instruction | Vector Lane Occupancy ('*' for active, '_' for inactive)\n");
        out.push_str("------------- --------------------------------------------------------\n");
        for record in &self.records {
            let _ = writeln!(out, "{:>12} | {}", record.name(), record.occupancy());
        }
        out
    }
}

impl InstructionSink for ExecutionLogger {
    fn record(&mut self, name: &str, mask: &Mask, lanes: usize) {
        let lanes = lanes.min(VECTOR_WIDTH);
        let mask_bits = mask.to_bits(lanes);
        let record = InstructionRecord::new(InstructionName::new(name), mask_bits, lanes);

        if lanes > 0 {
            let utilized = record.active_lanes() as u64;
            self.stats.add(utilized, lanes as u64);
            trace!(
                instruction = %record.name(),
                occupancy = %record.occupancy(),
                utilized,
                lanes,
                "vector instruction"
            );
        } else {
            trace!(annotation = %record.name(), "user log");
        }

        self.records.push(record);
    }
}

/// Cloneable handle to one logger shared by concurrent vector units.
///
/// Every append takes the lock, so records from different workers interleave
/// but each record and its counter update land atomically.
#[derive(Debug, Clone, Default)]
pub struct SharedLogger {
    inner: Arc<Mutex<ExecutionLogger>>,
}

impl SharedLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current log and counters
    pub fn snapshot(&self) -> ForgeResult<ExecutionLogger> {
        Ok(self.inner.lock()?.clone())
    }

    pub fn stats(&self) -> ForgeResult<VectorStats> {
        Ok(self.inner.lock()?.stats())
    }

    /// Take the logger out, leaving an empty one behind
    pub fn take(&self) -> ForgeResult<ExecutionLogger> {
        Ok(std::mem::take(&mut *self.inner.lock()?))
    }
}

impl InstructionSink for SharedLogger {
    fn record(&mut self, name: &str, mask: &Mask, lanes: usize) {
        // record() cannot panic between the counter update and the push
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(name, mask, lanes);
    }
}

impl<S: InstructionSink + ?Sized> InstructionSink for &mut S {
    fn record(&mut self, name: &str, mask: &Mask, lanes: usize) {
        (**self).record(name, mask, lanes);
    }
}
