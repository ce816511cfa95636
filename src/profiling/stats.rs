//! Aggregate lane-utilization statistics
//!
//! - [`VectorStats`] - running counters, only ever incremented
//! - [`StatsReport`] - read-only snapshot with the derived utilization

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ForgeResult;
use crate::vector::VECTOR_WIDTH;

/// Running totals over every counted instruction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorStats {
    /// Lanes that were active when their instruction issued
    pub utilized_lanes: u64,
    /// Lanes considered across all instructions
    pub total_lanes: u64,
    /// Instructions that declared a non-zero lane count
    pub total_instructions: u64,
}

impl VectorStats {
    pub(crate) fn add(&mut self, utilized: u64, lanes: u64) {
        self.utilized_lanes += utilized;
        self.total_lanes += lanes;
        self.total_instructions += 1;
    }

    /// Percentage of considered lanes that were active; 0 when nothing ran
    pub fn utilization_percent(&self) -> f64 {
        if self.total_lanes == 0 {
            return 0.0;
        }
        self.utilized_lanes as f64 / self.total_lanes as f64 * 100.0
    }

    pub fn report(&self) -> StatsReport {
        StatsReport {
            vector_width: VECTOR_WIDTH,
            total_instructions: self.total_instructions,
            utilization_percent: self.utilization_percent(),
            utilized_lanes: self.utilized_lanes,
            total_lanes: self.total_lanes,
        }
    }
}

/// Statistics block printed after a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub vector_width: usize,
    pub total_instructions: u64,
    pub utilization_percent: f64,
    pub utilized_lanes: u64,
    pub total_lanes: u64,
}

impl StatsReport {
    /// Pretty JSON rendering of the report
    pub fn to_json(&self) -> ForgeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "****************** Vector Unit Statistics *******************")?;
        writeln!(f, "Vector Width:              {}", self.vector_width)?;
        writeln!(f, "Total Vector Instructions: {}", self.total_instructions)?;
        writeln!(f, "Vector Utilization:        {:.6}%", self.utilization_percent)?;
        writeln!(f, "Utilized Vector Lanes:     {}", self.utilized_lanes)?;
        write!(f, "Total Vector Lanes:        {}", self.total_lanes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats_report_zero_utilization() {
        let stats = VectorStats::default();
        assert_eq!(stats.utilization_percent(), 0.0);
        assert!(!stats.report().utilization_percent.is_nan());
    }

    #[test]
    fn test_utilization_percent() {
        let mut stats = VectorStats::default();
        stats.add(4, 4);
        stats.add(2, 4);
        assert_eq!(stats.total_instructions, 2);
        assert_eq!(stats.utilized_lanes, 6);
        assert_eq!(stats.total_lanes, 8);
        assert!((stats.utilization_percent() - 75.0).abs() < 1e-12);
    }

    #[test]
    fn test_report_display_fields() {
        let mut stats = VectorStats::default();
        stats.add(3, 4);
        let text = stats.report().to_string();
        assert!(text.contains(&format!("Vector Width:              {}", VECTOR_WIDTH)));
        assert!(text.contains("Total Vector Instructions: 1"));
        assert!(text.contains("Vector Utilization:        75.000000%"));
        assert!(text.contains("Utilized Vector Lanes:     3"));
        assert!(text.contains("Total Vector Lanes:        4"));
    }

    #[test]
    fn test_report_serializable() {
        let mut stats = VectorStats::default();
        stats.add(2, 4);
        let json = stats.report().to_json().unwrap();
        assert!(json.contains("\"total_instructions\": 1"));
        assert!(json.contains("\"utilization_percent\": 50.0"));
    }
}
