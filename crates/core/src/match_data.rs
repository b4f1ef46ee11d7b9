//! Per-document match data
//!
//! This module provides:
//! - TermFieldMatchDataPosition: one occurrence of a term in a field
//! - TermFieldMatchData: occurrences of one (term, field) pair in the current document
//! - MatchDataLayout: per-query allocation of term field handles
//! - MatchData: handle-indexed match data, rebound for every scored document
//!
//! Match data is created once per query from a layout and then overwritten
//! in place for each document. Position storage is reused across documents,
//! so steady-state scoring does not allocate.

use crate::error::{FefError, Result};
use crate::types::{DocId, FieldId, TermFieldHandle, ILLEGAL_FIELD_ID, INVALID_DOC_ID};
use smallvec::SmallVec;

// ============================================================================
// TermFieldMatchDataPosition
// ============================================================================

/// One occurrence of a term inside a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermFieldMatchDataPosition {
    element_id: u32,
    position: u32,
    element_weight: i32,
    element_len: u32,
}

impl TermFieldMatchDataPosition {
    /// Create an occurrence at `position` within element `element_id`
    pub fn new(element_id: u32, position: u32, element_weight: i32, element_len: u32) -> Self {
        TermFieldMatchDataPosition {
            element_id,
            position,
            element_weight,
            element_len,
        }
    }

    /// Element (array index) the occurrence is in
    pub fn element_id(&self) -> u32 {
        self.element_id
    }

    /// Word position within the element
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Weight of the element (weighted sets)
    pub fn element_weight(&self) -> i32 {
        self.element_weight
    }

    /// Length of the element in words
    pub fn element_len(&self) -> u32 {
        self.element_len
    }

    /// Copy of this occurrence moved `offset` words forward
    pub fn shifted(&self, offset: u32) -> Self {
        TermFieldMatchDataPosition {
            position: self.position.saturating_add(offset),
            ..*self
        }
    }
}

// ============================================================================
// TermFieldMatchData
// ============================================================================

/// Occurrences of one (term, field) pair in the current document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermFieldMatchData {
    field_id: FieldId,
    doc_id: DocId,
    positions: SmallVec<[TermFieldMatchDataPosition; 4]>,
}

impl TermFieldMatchData {
    /// Create unbound match data for `field_id`
    pub fn new(field_id: FieldId) -> Self {
        TermFieldMatchData {
            field_id,
            doc_id: INVALID_DOC_ID,
            positions: SmallVec::new(),
        }
    }

    /// Field this slot belongs to
    pub fn field_id(&self) -> FieldId {
        self.field_id
    }

    /// Document the stored occurrences belong to
    pub fn doc_id(&self) -> DocId {
        self.doc_id
    }

    /// Whether the slot holds data for `doc_id`
    pub fn has_data_for(&self, doc_id: DocId) -> bool {
        self.doc_id == doc_id
    }

    /// Bind to `doc_id` and drop previous occurrences, keeping capacity
    pub fn reset(&mut self, doc_id: DocId) {
        self.doc_id = doc_id;
        self.positions.clear();
    }

    /// Record an occurrence
    pub fn append_position(&mut self, pos: TermFieldMatchDataPosition) {
        self.positions.push(pos);
    }

    /// Occurrences in insertion order
    pub fn positions(&self) -> &[TermFieldMatchDataPosition] {
        &self.positions
    }

    /// Number of occurrences
    pub fn num_occs(&self) -> usize {
        self.positions.len()
    }

    /// Overwrite this slot with `src`, every position moved `offset` words forward
    pub fn copy_shifted_from(&mut self, src: &TermFieldMatchData, offset: u32) {
        self.reset(src.doc_id);
        self.positions
            .extend(src.positions.iter().map(|pos| pos.shifted(offset)));
    }
}

// ============================================================================
// MatchDataLayout
// ============================================================================

/// Per-query handle allocation for match data
///
/// Handles are dense indexes into the match data created from the layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchDataLayout {
    fields: Vec<FieldId>,
}

impl MatchDataLayout {
    /// Create an empty layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next handle for `field_id`
    pub fn alloc_term_field(&mut self, field_id: FieldId) -> TermFieldHandle {
        self.fields.push(field_id);
        (self.fields.len() - 1) as TermFieldHandle
    }

    /// Make sure `handle` exists and belongs to `field_id`
    ///
    /// Gaps below `handle` are filled with padding slots.
    pub fn reserve_term_field(&mut self, handle: TermFieldHandle, field_id: FieldId) {
        let idx = handle as usize;
        if idx >= self.fields.len() {
            self.fields.resize(idx + 1, ILLEGAL_FIELD_ID);
        }
        self.fields[idx] = field_id;
    }

    /// Number of allocated handles
    pub fn num_term_fields(&self) -> usize {
        self.fields.len()
    }

    /// Create match data with one slot per allocated handle
    pub fn create_match_data(&self) -> MatchData {
        MatchData {
            term_fields: self.fields.iter().map(|&f| TermFieldMatchData::new(f)).collect(),
        }
    }
}

// ============================================================================
// MatchData
// ============================================================================

/// Handle-indexed match data for the document being scored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchData {
    term_fields: Vec<TermFieldMatchData>,
}

impl MatchData {
    /// Number of term field slots
    pub fn num_term_fields(&self) -> usize {
        self.term_fields.len()
    }

    /// Slot for `handle`
    pub fn resolve(&self, handle: TermFieldHandle) -> Option<&TermFieldMatchData> {
        self.term_fields.get(handle as usize)
    }

    /// Mutable slot for `handle`
    pub fn resolve_mut(&mut self, handle: TermFieldHandle) -> Option<&mut TermFieldMatchData> {
        self.term_fields.get_mut(handle as usize)
    }

    /// Borrow `src` for reading and `dst` for writing at the same time
    ///
    /// # Errors
    ///
    /// Returns `UnknownHandle` if either handle has no slot, or if both
    /// handles are the same slot.
    pub fn pair_mut(
        &mut self,
        src: TermFieldHandle,
        dst: TermFieldHandle,
    ) -> Result<(&TermFieldMatchData, &mut TermFieldMatchData)> {
        let len = self.term_fields.len();
        let (s, d) = (src as usize, dst as usize);
        if s >= len {
            return Err(FefError::UnknownHandle(src));
        }
        if d >= len || s == d {
            return Err(FefError::UnknownHandle(dst));
        }
        if s < d {
            let (lo, hi) = self.term_fields.split_at_mut(d);
            Ok((&lo[s], &mut hi[0]))
        } else {
            let (lo, hi) = self.term_fields.split_at_mut(s);
            Ok((&hi[0], &mut lo[d]))
        }
    }
}
