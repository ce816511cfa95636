//! Immutable execution log entries

use serde::Serialize;
use std::fmt;

use crate::vector::VECTOR_WIDTH;

/// Size of an instruction name buffer, terminator included
pub const MAX_INSTRUCTION_LEN: usize = 32;

/// Instruction name of at most `MAX_INSTRUCTION_LEN - 1` bytes.
///
/// Longer input is truncated at the last UTF-8 character boundary that fits,
/// so a name never splits a multi-byte character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InstructionName(String);

impl InstructionName {
    pub const MAX_BYTES: usize = MAX_INSTRUCTION_LEN - 1;

    pub fn new(name: &str) -> Self {
        let mut end = name.len().min(Self::MAX_BYTES);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        InstructionName(name[..end].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_truncated_from(&self, original: &str) -> bool {
        self.0.len() < original.len()
    }
}

impl From<&str> for InstructionName {
    fn from(name: &str) -> Self {
        InstructionName::new(name)
    }
}

impl fmt::Display for InstructionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// One recorded instruction issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionRecord {
    name: InstructionName,
    /// Bit i set iff lane i was active, restricted to the first `lanes` lanes
    mask_bits: u64,
    /// Lane count the instruction declared; 0 for annotations
    lanes: usize,
}

impl InstructionRecord {
    pub(crate) fn new(name: InstructionName, mask_bits: u64, lanes: usize) -> Self {
        Self {
            name,
            mask_bits,
            lanes,
        }
    }

    pub fn name(&self) -> &InstructionName {
        &self.name
    }

    pub fn mask_bits(&self) -> u64 {
        self.mask_bits
    }

    pub fn lanes(&self) -> usize {
        self.lanes
    }

    /// User annotation rather than a counted instruction
    pub fn is_annotation(&self) -> bool {
        self.lanes == 0
    }

    pub fn is_lane_active(&self, lane: usize) -> bool {
        lane < 64 && self.mask_bits & (1u64 << lane) != 0
    }

    pub fn active_lanes(&self) -> usize {
        self.mask_bits.count_ones() as usize
    }

    /// `*` for active, `_` for inactive, over lanes `[0, VECTOR_WIDTH)`
    pub fn occupancy(&self) -> String {
        (0..VECTOR_WIDTH)
            .map(|lane| if self.is_lane_active(lane) { '*' } else { '_' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_kept() {
        let name = InstructionName::new("vadd");
        assert_eq!(name.as_str(), "vadd");
        assert!(!name.is_truncated_from("vadd"));
    }

    #[test]
    fn test_long_name_truncated_to_bound() {
        let long = "x".repeat(100);
        let name = InstructionName::new(&long);
        assert_eq!(name.as_str().len(), InstructionName::MAX_BYTES);
        assert_eq!(name.as_str().len(), 31);
        assert!(name.is_truncated_from(&long));
    }

    #[test]
    fn test_exact_bound_not_truncated() {
        let exact = "y".repeat(InstructionName::MAX_BYTES);
        assert_eq!(InstructionName::new(&exact).as_str(), exact);
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // 30 ASCII bytes then a 3-byte character straddling the 31-byte bound
        let name = format!("{}€tail", "a".repeat(30));
        let truncated = InstructionName::new(&name);
        assert_eq!(truncated.as_str(), "a".repeat(30));
    }

    #[test]
    fn test_occupancy_markers() {
        let record = InstructionRecord::new("vgt".into(), 0b01, VECTOR_WIDTH);
        let occupancy = record.occupancy();
        assert_eq!(occupancy.len(), VECTOR_WIDTH);
        assert!(occupancy.starts_with("*_"));
        assert_eq!(record.active_lanes(), 1);
        assert!(!record.is_annotation());
    }

    #[test]
    fn test_annotation_has_no_active_lanes() {
        let record = InstructionRecord::new("checkpoint".into(), 0, 0);
        assert!(record.is_annotation());
        assert_eq!(record.occupancy(), "_".repeat(VECTOR_WIDTH));
    }
}
