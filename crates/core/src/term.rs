//! Query term descriptions
//!
//! This module provides:
//! - TermFieldData: per-field view of a term (field id, match data handle, doc frequency)
//! - TermData trait: read-only capability describing one query term
//! - SimpleTermData: owned, builder-style implementation of TermData
//!
//! A term with `phrase_length() > 1` is a phrase: an ordered sequence of
//! words matched as a unit, whose match data records the position of the
//! first word.

use crate::types::{FieldId, TermFieldHandle, ILLEGAL_HANDLE};

// ============================================================================
// TermFieldData
// ============================================================================

/// Per-field information about a query term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermFieldData {
    field_id: FieldId,
    handle: TermFieldHandle,
    matching_doc_count: u64,
    total_doc_count: u64,
}

impl TermFieldData {
    /// Create field data with no match data slot and no statistics
    pub fn new(field_id: FieldId) -> Self {
        TermFieldData {
            field_id,
            handle: ILLEGAL_HANDLE,
            matching_doc_count: 0,
            total_doc_count: 1,
        }
    }

    /// Field this entry refers to
    pub fn field_id(&self) -> FieldId {
        self.field_id
    }

    /// Match data slot for this (term, field) pair
    pub fn handle(&self) -> TermFieldHandle {
        self.handle
    }

    /// Whether a match data slot has been assigned
    pub fn has_handle(&self) -> bool {
        self.handle != ILLEGAL_HANDLE
    }

    /// Set the match data slot
    pub fn set_handle(&mut self, handle: TermFieldHandle) -> &mut Self {
        self.handle = handle;
        self
    }

    /// Record document frequency statistics
    pub fn set_doc_freq(&mut self, matching_doc_count: u64, total_doc_count: u64) -> &mut Self {
        self.matching_doc_count = matching_doc_count;
        self.total_doc_count = total_doc_count;
        self
    }

    /// Number of documents matching the term in this field
    pub fn matching_doc_count(&self) -> u64 {
        self.matching_doc_count
    }

    /// Number of documents in the corpus
    pub fn total_doc_count(&self) -> u64 {
        self.total_doc_count
    }

    /// Fraction of documents matching, in `[0, 1]`
    pub fn doc_freq(&self) -> f64 {
        if self.total_doc_count == 0 {
            return 0.0;
        }
        self.matching_doc_count as f64 / self.total_doc_count as f64
    }
}

// ============================================================================
// TermData
// ============================================================================

/// Read-only description of a query term
///
/// Implemented by the query layer's own term type and by [`SimpleTermData`].
/// References implement it too, so environments can hand out `&T`.
pub trait TermData {
    /// Query weight of the term
    fn weight(&self) -> i32;

    /// Unique id assigned by the query layer (0 = none)
    fn unique_id(&self) -> u32;

    /// Number of words in the term (1 for a single word)
    fn phrase_length(&self) -> u32;

    /// Fields this term is searched in
    fn fields(&self) -> &[TermFieldData];

    /// Number of fields this term is searched in
    fn num_fields(&self) -> usize {
        self.fields().len()
    }

    /// Field data for `field_id`, if the term is searched there
    fn lookup_field(&self, field_id: FieldId) -> Option<&TermFieldData> {
        self.fields().iter().find(|f| f.field_id() == field_id)
    }

    /// Match data handle for `field_id`, if the term has a slot there
    fn field_handle(&self, field_id: FieldId) -> Option<TermFieldHandle> {
        self.lookup_field(field_id)
            .filter(|f| f.has_handle())
            .map(TermFieldData::handle)
    }
}

impl<T: TermData + ?Sized> TermData for &T {
    fn weight(&self) -> i32 {
        (**self).weight()
    }

    fn unique_id(&self) -> u32 {
        (**self).unique_id()
    }

    fn phrase_length(&self) -> u32 {
        (**self).phrase_length()
    }

    fn fields(&self) -> &[TermFieldData] {
        (**self).fields()
    }
}

// ============================================================================
// SimpleTermData
// ============================================================================

/// Owned term description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleTermData {
    weight: i32,
    unique_id: u32,
    phrase_length: u32,
    fields: Vec<TermFieldData>,
}

impl Default for SimpleTermData {
    fn default() -> Self {
        SimpleTermData {
            weight: 100,
            unique_id: 0,
            phrase_length: 1,
            fields: Vec::new(),
        }
    }
}

impl SimpleTermData {
    /// Create a single-word term with default weight and no fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set query weight
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Builder: set unique id
    pub fn with_unique_id(mut self, unique_id: u32) -> Self {
        self.unique_id = unique_id;
        self
    }

    /// Builder: set number of words
    pub fn with_phrase_length(mut self, phrase_length: u32) -> Self {
        self.phrase_length = phrase_length;
        self
    }

    /// Builder: add a field with a match data handle
    pub fn with_field(mut self, field_id: FieldId, handle: TermFieldHandle) -> Self {
        self.add_field(field_id).set_handle(handle);
        self
    }

    /// Add a field and return it for further setup
    pub fn add_field(&mut self, field_id: FieldId) -> &mut TermFieldData {
        self.fields.push(TermFieldData::new(field_id));
        let last = self.fields.len() - 1;
        &mut self.fields[last]
    }

    /// Push a fully formed field entry
    pub fn push_field(&mut self, field: TermFieldData) {
        self.fields.push(field);
    }
}

impl TermData for SimpleTermData {
    fn weight(&self) -> i32 {
        self.weight
    }

    fn unique_id(&self) -> u32 {
        self.unique_id
    }

    fn phrase_length(&self) -> u32 {
        self.phrase_length
    }

    fn fields(&self) -> &[TermFieldData] {
        &self.fields
    }
}
