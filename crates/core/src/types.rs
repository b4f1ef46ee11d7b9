//! Core identifier types for the rank feature framework
//!
//! This module defines the foundational types:
//! - FieldId: Index of a field in the index environment
//! - TermFieldHandle: Slot of a (term, field) pair in per-document match data
//! - DocId: Local document id
//! - FieldInfo: Description of a field known to the index environment

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a field in the index environment
pub type FieldId = u32;

/// Identifies a (term, field) slot in per-document match data
pub type TermFieldHandle = u32;

/// Local document id
pub type DocId = u32;

/// Handle value for a term field that has no match data slot
pub const ILLEGAL_HANDLE: TermFieldHandle = u32::MAX;

/// Field id used for padding slots that belong to no field
pub const ILLEGAL_FIELD_ID: FieldId = u32::MAX;

/// Document id carried by match data not yet bound to any document
pub const INVALID_DOC_ID: DocId = u32::MAX;

/// How a field is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Tokenized, position-aware index field
    Index,
    /// In-memory attribute field
    Attribute,
}

/// How many values a field holds per document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionType {
    /// Exactly one value
    Single,
    /// Ordered list of values (elements)
    Array,
    /// Unordered values, each with a weight
    WeightedSet,
}

/// Description of a field known to the index environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    id: FieldId,
    name: String,
    field_type: FieldType,
    collection: CollectionType,
}

impl FieldInfo {
    /// Create a new field description
    pub fn new(
        id: FieldId,
        name: impl Into<String>,
        field_type: FieldType,
        collection: CollectionType,
    ) -> Self {
        FieldInfo {
            id,
            name: name.into(),
            field_type,
            collection,
        }
    }

    /// Field id
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Storage kind
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Value multiplicity
    pub fn collection(&self) -> CollectionType {
        self.collection
    }

    /// Whether documents can hold more than one element in this field
    pub fn is_multi_valued(&self) -> bool {
        self.collection != CollectionType::Single
    }
}

impl fmt::Display for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_info_accessors() {
        let info = FieldInfo::new(3, "title", FieldType::Index, CollectionType::Single);
        assert_eq!(info.id(), 3);
        assert_eq!(info.name(), "title");
        assert_eq!(info.field_type(), FieldType::Index);
        assert!(!info.is_multi_valued());
    }

    #[test]
    fn test_field_info_multi_valued() {
        let array = FieldInfo::new(0, "tags", FieldType::Attribute, CollectionType::Array);
        let wset = FieldInfo::new(1, "cats", FieldType::Attribute, CollectionType::WeightedSet);
        assert!(array.is_multi_valued());
        assert!(wset.is_multi_valued());
    }

    #[test]
    fn test_field_info_display() {
        let info = FieldInfo::new(5, "body", FieldType::Index, CollectionType::Array);
        assert_eq!(info.to_string(), "body#5");
    }

    #[test]
    fn test_sentinels_are_distinct_from_small_ids() {
        assert_eq!(ILLEGAL_HANDLE, u32::MAX);
        assert_eq!(ILLEGAL_FIELD_ID, u32::MAX);
        assert_ne!(INVALID_DOC_ID, 0);
    }
}
