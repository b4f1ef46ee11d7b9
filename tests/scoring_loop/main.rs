//! Scoring Loop Test Suite
//!
//! Drives the phrase splitter the way a ranking pipeline does: build the
//! query environment and match data layout once per query, then unpack
//! postings, bridge phrase match data and run single-term features for
//! every document.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Feature Visibility** (what single-term features see)
//! - **Tier 2: Document Loop** (per-document rebinding, idempotence)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test scoring_loop
//! cargo test --test scoring_loop tier2
//! ```

mod test_utils;

// Tier 1: Feature Visibility
mod tier1_feature_visibility;

// Tier 2: Document Loop
mod tier2_document_loop;
