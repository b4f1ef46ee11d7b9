//! Environment capabilities consumed by rank features
//!
//! This module defines the IndexEnvironment, AttributeContext and
//! QueryEnvironment traits. Rank features are written against these traits,
//! so an adapter implementing them can be substituted anywhere the original
//! environment was used.

use crate::location::Location;
use crate::properties::Properties;
use crate::term::TermData;
use crate::types::{CollectionType, FieldId, FieldInfo};

/// Static description of the index a query runs against
pub trait IndexEnvironment {
    /// Index-level rank properties
    fn properties(&self) -> &Properties;

    /// Number of fields
    fn num_fields(&self) -> u32;

    /// Field by id
    fn field(&self, id: FieldId) -> Option<&FieldInfo>;

    /// Field by name
    fn field_by_name(&self, name: &str) -> Option<&FieldInfo>;
}

/// Descriptor of an attribute reachable from the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeInfo {
    name: String,
    collection: CollectionType,
}

impl AttributeInfo {
    /// Create an attribute descriptor
    pub fn new(name: impl Into<String>, collection: CollectionType) -> Self {
        AttributeInfo {
            name: name.into(),
            collection,
        }
    }

    /// Attribute name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value multiplicity
    pub fn collection(&self) -> CollectionType {
        self.collection
    }
}

/// Access to attribute vectors for the current query
pub trait AttributeContext {
    /// Attribute by name
    fn attribute(&self, name: &str) -> Option<&AttributeInfo>;

    /// All attributes known to the context
    fn attributes(&self) -> &[AttributeInfo];
}

/// Everything a rank feature may know about the current query
///
/// Terms are handed out by value through the `Term` associated type so that
/// adapters can return a view that is either borrowed from a wrapped
/// environment or owned by the adapter, resolved without dynamic dispatch.
pub trait QueryEnvironment {
    /// Term view returned by [`QueryEnvironment::term`]
    type Term<'t>: TermData
    where
        Self: 't;

    /// Number of terms in the query
    fn term_count(&self) -> u32;

    /// Term at `idx`, or `None` when `idx >= term_count()`
    fn term(&self, idx: u32) -> Option<Self::Term<'_>>;

    /// Query-level rank properties
    fn properties(&self) -> &Properties;

    /// Location attached to the query
    fn location(&self) -> &Location;

    /// Attribute access for the query
    fn attribute_context(&self) -> &dyn AttributeContext;

    /// Index the query runs against
    fn index_environment(&self) -> &dyn IndexEnvironment;

    /// Average length in words of `field_name` across the corpus
    fn average_field_length(&self, field_name: &str) -> f64;
}
