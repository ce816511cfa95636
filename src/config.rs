//! Simulation run configuration
//!
//! [`SimConfig`] controls one driver run: how many elements the workload
//! has, whether the execution log is printed, and how the report is
//! rendered.

use serde::{Deserialize, Serialize};

use crate::error::{ForgeResult, VecForgeError};

/// Report rendering for the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of workload elements; must be positive
    pub workload_size: i64,

    /// Print the per-instruction occupancy log after each kernel
    pub print_log: bool,

    /// Seed for workload generation; entropy when unset
    pub seed: Option<u64>,

    pub output_format: OutputFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            workload_size: 16,
            print_log: false,
            seed: None,
            output_format: OutputFormat::Text,
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workload_size(mut self, workload_size: i64) -> Self {
        self.workload_size = workload_size;
        self
    }

    pub fn with_print_log(mut self, print_log: bool) -> Self {
        self.print_log = print_log;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Reject a non-positive workload size, and a log request in JSON mode
    pub fn validate(&self) -> ForgeResult<()> {
        self.workload_len()?;
        if self.print_log && self.output_format == OutputFormat::Json {
            return Err(crate::user_error!("the occupancy log is only available with text output"));
        }
        Ok(())
    }

    /// Workload size as an element count
    pub fn workload_len(&self) -> ForgeResult<usize> {
        if self.workload_size <= 0 {
            return Err(VecForgeError::InvalidWorkloadSize(self.workload_size));
        }
        usize::try_from(self.workload_size)
            .map_err(|_| VecForgeError::InvalidWorkloadSize(self.workload_size))
    }
}
