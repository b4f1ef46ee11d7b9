//! In-memory environments
//!
//! Owned implementations of the environment traits. The search backend
//! builds these from the parsed query and the schema; tests build them by
//! hand.

use crate::location::Location;
use crate::properties::Properties;
use crate::term::SimpleTermData;
use crate::traits::{AttributeContext, AttributeInfo, IndexEnvironment, QueryEnvironment};
use crate::types::{CollectionType, FieldId, FieldInfo, FieldType};
use rustc_hash::FxHashMap;

/// Average field length reported for fields without statistics
pub const DEFAULT_AVERAGE_FIELD_LENGTH: f64 = 100.0;

// ============================================================================
// SimpleIndexEnvironment
// ============================================================================

/// Field registry plus index-level properties
#[derive(Debug, Clone, Default)]
pub struct SimpleIndexEnvironment {
    fields: Vec<FieldInfo>,
    by_name: FxHashMap<String, FieldId>,
    properties: Properties,
}

impl SimpleIndexEnvironment {
    /// Create an environment with no fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field and return its id
    ///
    /// Registering a name twice returns the existing id.
    pub fn add_field(
        &mut self,
        name: &str,
        field_type: FieldType,
        collection: CollectionType,
    ) -> FieldId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = self.fields.len() as FieldId;
        self.fields
            .push(FieldInfo::new(id, name, field_type, collection));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Mutable index-level properties
    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

impl IndexEnvironment for SimpleIndexEnvironment {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn num_fields(&self) -> u32 {
        self.fields.len() as u32
    }

    fn field(&self, id: FieldId) -> Option<&FieldInfo> {
        self.fields.get(id as usize)
    }

    fn field_by_name(&self, name: &str) -> Option<&FieldInfo> {
        self.by_name.get(name).and_then(|&id| self.field(id))
    }
}

// ============================================================================
// StaticAttributeContext
// ============================================================================

/// Fixed set of attribute descriptors
#[derive(Debug, Clone, Default)]
pub struct StaticAttributeContext {
    attributes: Vec<AttributeInfo>,
}

impl StaticAttributeContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attribute
    pub fn add(&mut self, info: AttributeInfo) {
        self.attributes.push(info);
    }
}

impl AttributeContext for StaticAttributeContext {
    fn attribute(&self, name: &str) -> Option<&AttributeInfo> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    fn attributes(&self) -> &[AttributeInfo] {
        &self.attributes
    }
}

// ============================================================================
// SimpleQueryEnvironment
// ============================================================================

/// Owned query environment
#[derive(Debug, Clone, Default)]
pub struct SimpleQueryEnvironment {
    index_env: SimpleIndexEnvironment,
    terms: Vec<SimpleTermData>,
    properties: Properties,
    location: Location,
    attributes: StaticAttributeContext,
    avg_field_lengths: FxHashMap<String, f64>,
}

impl SimpleQueryEnvironment {
    /// Create an environment over `index_env` with no terms
    pub fn new(index_env: SimpleIndexEnvironment) -> Self {
        SimpleQueryEnvironment {
            index_env,
            ..Self::default()
        }
    }

    /// Append a term
    pub fn add_term(&mut self, term: SimpleTermData) -> &mut Self {
        self.terms.push(term);
        self
    }

    /// Builder: set the query location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Record the corpus average length of `field_name`
    pub fn set_average_field_length(&mut self, field_name: &str, len: f64) {
        self.avg_field_lengths.insert(field_name.to_string(), len);
    }

    /// Mutable query-level properties
    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    /// Mutable attribute context
    pub fn attributes_mut(&mut self) -> &mut StaticAttributeContext {
        &mut self.attributes
    }
}

impl QueryEnvironment for SimpleQueryEnvironment {
    type Term<'t> = &'t SimpleTermData;

    fn term_count(&self) -> u32 {
        self.terms.len() as u32
    }

    fn term(&self, idx: u32) -> Option<Self::Term<'_>> {
        self.terms.get(idx as usize)
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn attribute_context(&self) -> &dyn AttributeContext {
        &self.attributes
    }

    fn index_environment(&self) -> &dyn IndexEnvironment {
        &self.index_env
    }

    fn average_field_length(&self, field_name: &str) -> f64 {
        self.avg_field_lengths
            .get(field_name)
            .copied()
            .unwrap_or(DEFAULT_AVERAGE_FIELD_LENGTH)
    }
}
