//! Core types and traits for the Strata rank feature framework
//!
//! This crate defines the vocabulary shared by rank features and the
//! adapters that feed them:
//! - FieldId, TermFieldHandle, DocId: identifiers and their sentinels
//! - FefError: Error type hierarchy
//! - Properties: string multimap of rank settings
//! - Location: query position for distance features
//! - TermData: read-only description of a query term
//! - Traits: QueryEnvironment, IndexEnvironment, AttributeContext
//! - MatchData: per-document, handle-indexed occurrence data
//! - Simple* environments: owned in-memory implementations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod environment;
pub mod error;
pub mod location;
pub mod match_data;
pub mod properties;
pub mod term;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use environment::{
    SimpleIndexEnvironment, SimpleQueryEnvironment, StaticAttributeContext,
    DEFAULT_AVERAGE_FIELD_LENGTH,
};
pub use error::{FefError, Result};
pub use location::Location;
pub use match_data::{MatchData, MatchDataLayout, TermFieldMatchData, TermFieldMatchDataPosition};
pub use properties::{Properties, Property};
pub use term::{SimpleTermData, TermData, TermFieldData};
pub use traits::{AttributeContext, AttributeInfo, IndexEnvironment, QueryEnvironment};
pub use types::{
    CollectionType, DocId, FieldId, FieldInfo, FieldType, TermFieldHandle, ILLEGAL_FIELD_ID,
    ILLEGAL_HANDLE, INVALID_DOC_ID,
};
