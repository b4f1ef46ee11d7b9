//! Phrase splitting for rank features
//!
//! This crate provides:
//! - PhraseSplitter: a QueryEnvironment that splits the phrases of one field
//!   into single terms
//! - HandleAllocator: match data handles for synthesized terms
//! - TermIndexMap: renumbering between public term slots and their origin
//! - MatchDataBridge: per-document propagation of phrase occurrences
//! - PhraseSplitConfig: field selection from TOML or rank properties
//!
//! # Usage
//!
//! ```ignore
//! use strata_search::PhraseSplitter;
//!
//! let splitter = PhraseSplitter::for_field_name(&query_env, "title")?;
//! splitter.reserve_handles(&mut layout);
//! let mut md = layout.create_match_data();
//!
//! for doc in docs {
//!     // ... unpack postings into md ...
//!     splitter.update_match_data(&mut md)?;
//!     // ... run features against &splitter and &md ...
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bridge;
pub mod config;
pub mod handles;
pub mod splitter;
pub mod term_map;

// Re-export commonly used types
pub use bridge::{CopyInstruction, MatchDataBridge};
pub use config::{PhraseSplitConfig, ENABLED_PROPERTY, FIELD_PROPERTY};
pub use handles::HandleAllocator;
pub use splitter::{PhraseSplitter, SplitTerm};
pub use term_map::{TermIndexMap, TermSlot};
