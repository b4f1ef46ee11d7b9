//! Per-document propagation of phrase match data
//!
//! A phrase's match data records where the phrase starts. Each synthesized
//! sub-term gets a copy of those occurrences moved forward by its ordinal
//! position in the phrase, so word `k` of a phrase found at `p` is reported
//! at `p + k`.
//!
//! The bridge runs once per scored document. It overwrites the synthesized
//! slots on every run, which makes it idempotent, and it reuses each slot's
//! position storage, which keeps it allocation-free once warmed up.

use strata_core::{MatchData, Result, TermFieldHandle};

/// How to derive one synthesized term's match data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyInstruction {
    /// Slot of the phrase in the wrapped environment
    pub original_handle: TermFieldHandle,
    /// Slot of the synthesized sub-term
    pub synthesized_handle: TermFieldHandle,
    /// Zero-based position of the sub-term within the phrase
    pub offset_in_phrase: u32,
}

/// Ordered list of copy instructions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchDataBridge {
    instructions: Vec<CopyInstruction>,
}

impl MatchDataBridge {
    /// Create an empty bridge sized for `capacity` instructions
    pub fn with_capacity(capacity: usize) -> Self {
        MatchDataBridge {
            instructions: Vec::with_capacity(capacity),
        }
    }

    /// Append an instruction
    pub fn push(&mut self, instruction: CopyInstruction) {
        self.instructions.push(instruction);
    }

    /// All instructions in construction order
    pub fn instructions(&self) -> &[CopyInstruction] {
        &self.instructions
    }

    /// Number of instructions
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if there is nothing to propagate
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Populate every synthesized slot in `md` from its phrase slot
    ///
    /// # Errors
    ///
    /// Returns `UnknownHandle` if `md` has no slot for a handle named by an
    /// instruction. Instructions before the failing one have been applied.
    pub fn apply(&self, md: &mut MatchData) -> Result<()> {
        for ins in &self.instructions {
            let (src, dst) = md.pair_mut(ins.original_handle, ins.synthesized_handle)?;
            dst.copy_shifted_from(src, ins.offset_in_phrase);
        }
        Ok(())
    }
}
