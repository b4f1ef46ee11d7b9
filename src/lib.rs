//! Strata rank - adapters for the rank feature framework
//!
//! Rank features are written against single query terms. This crate lets
//! them run over phrase queries by presenting each phrase searched in a
//! chosen field as independent single-word terms, with per-document match
//! data derived from the phrase's own.
//!
//! # Quick Start
//!
//! ```ignore
//! use strata_rank::{PhraseSplitter, QueryEnvironment};
//!
//! let splitter = PhraseSplitter::for_field_name(&query_env, "title")?;
//! splitter.reserve_handles(&mut layout);
//! let mut md = layout.create_match_data();
//!
//! // per document, after unpacking postings into `md`:
//! splitter.update_match_data(&mut md)?;
//! ```
//!
//! # Architecture
//!
//! - `strata-core`: framework vocabulary (terms, environments, match data)
//! - `strata-search`: the phrase splitter and its configuration

// Re-export the public API
pub use strata_core::*;
pub use strata_search::*;
