//! Phrase-splitting query environment
//!
//! This module provides:
//! - PhraseSplitter: a QueryEnvironment that presents every phrase searched in
//!   one field as independent single-word terms
//! - SplitTerm: the term view it hands out
//!
//! # Construction
//!
//! The wrapped environment is scanned once, in term order. A term with more
//! than one word that has a match data slot in the target field is replaced by
//! one synthesized term per word, in word order. Every other term, including
//! phrases searched only in other fields, keeps its slot and its handles.
//!
//! Synthesized terms get fresh handles above every handle used by the wrapped
//! environment, so their match data never overlaps an original slot. A phrase
//! whose words no longer fit below `ILLEGAL_HANDLE` is kept whole.
//!
//! # Per document
//!
//! Before features read match data for a document, call
//! [`PhraseSplitter::update_match_data`] to copy each phrase's occurrences into
//! its sub-terms' slots, moved forward by the sub-term's position in the phrase.

use crate::bridge::{CopyInstruction, MatchDataBridge};
use crate::config::PhraseSplitConfig;
use crate::handles::HandleAllocator;
use crate::term_map::{TermIndexMap, TermSlot};
use strata_core::{
    AttributeContext, FefError, FieldId, IndexEnvironment, Location, MatchData, MatchDataLayout,
    Properties, QueryEnvironment, Result, SimpleTermData, TermData, TermFieldData,
    TermFieldHandle,
};
use tracing::{debug, trace, warn};

// ============================================================================
// SplitTerm
// ============================================================================

/// Term handed out by [`PhraseSplitter`]
#[derive(Debug, Clone, Copy)]
pub enum SplitTerm<'t, T> {
    /// Term served unchanged by the wrapped environment
    Original(T),
    /// One word of a split phrase
    Synthesized(&'t SimpleTermData),
}

impl<'t, T> SplitTerm<'t, T> {
    /// Whether this term was produced by splitting a phrase
    pub fn is_synthesized(&self) -> bool {
        matches!(self, SplitTerm::Synthesized(_))
    }
}

impl<'t, T: TermData> TermData for SplitTerm<'t, T> {
    fn weight(&self) -> i32 {
        match self {
            SplitTerm::Original(t) => t.weight(),
            SplitTerm::Synthesized(t) => t.weight(),
        }
    }

    fn unique_id(&self) -> u32 {
        match self {
            SplitTerm::Original(t) => t.unique_id(),
            SplitTerm::Synthesized(t) => t.unique_id(),
        }
    }

    fn phrase_length(&self) -> u32 {
        match self {
            SplitTerm::Original(t) => t.phrase_length(),
            SplitTerm::Synthesized(t) => t.phrase_length(),
        }
    }

    fn fields(&self) -> &[TermFieldData] {
        match self {
            SplitTerm::Original(t) => t.fields(),
            SplitTerm::Synthesized(t) => t.fields(),
        }
    }
}

// ============================================================================
// PhraseSplitter
// ============================================================================

/// Query environment with the phrases of one field split into single terms
///
/// The wrapped environment is borrowed for the splitter's whole lifetime and
/// is never mutated. Everything else is built once in the constructor and is
/// read-only afterwards.
#[derive(Debug)]
pub struct PhraseSplitter<'a, E: QueryEnvironment + ?Sized> {
    env: &'a E,
    field_id: Option<FieldId>,
    terms: Vec<SimpleTermData>,
    term_map: TermIndexMap,
    bridge: MatchDataBridge,
    handles: HandleAllocator,
    split_phrases: u32,
}

impl<'a, E: QueryEnvironment + ?Sized> PhraseSplitter<'a, E> {
    /// Split the phrases of `env` that are searched in `field_id`
    pub fn new(env: &'a E, field_id: FieldId) -> Self {
        Self::build(env, Some(field_id))
    }

    /// Split the phrases searched in the field called `field_name`
    ///
    /// # Errors
    ///
    /// Returns `FieldNotFound` if the index environment has no such field.
    pub fn for_field_name(env: &'a E, field_name: &str) -> Result<Self> {
        let field_id = env
            .index_environment()
            .field_by_name(field_name)
            .map(|f| f.id())
            .ok_or_else(|| FefError::FieldNotFound(field_name.to_string()))?;
        Ok(Self::new(env, field_id))
    }

    /// Build from configuration
    ///
    /// A disabled config yields a splitter that passes every term through.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` or `FieldNotFound` when an enabled config is
    /// invalid or names an unknown field.
    pub fn from_config(env: &'a E, config: &PhraseSplitConfig) -> Result<Self> {
        if !config.enabled {
            return Ok(Self::build(env, None));
        }
        config.validate()?;
        Self::for_field_name(env, config.field.trim())
    }

    fn build(env: &'a E, field_id: Option<FieldId>) -> Self {
        let num_terms = env.term_count();
        let mut handles = HandleAllocator::for_environment(env);
        let mut terms = Vec::new();
        let mut term_map = TermIndexMap::with_capacity(num_terms as usize);
        let mut bridge = MatchDataBridge::default();
        let mut split_phrases = 0;

        for idx in 0..num_terms {
            let phrase_field = env.term(idx).and_then(|term| {
                let field = field_id
                    .filter(|_| term.phrase_length() > 1)
                    .and_then(|f| term.lookup_field(f))
                    .filter(|f| f.has_handle())
                    .copied()?;
                Some((field, term.phrase_length(), term.weight(), term.unique_id()))
            });
            let Some((field, phrase_length, weight, unique_id)) = phrase_field else {
                term_map.push_original(idx);
                continue;
            };
            let Some(block) = handles.allocate_range(phrase_length) else {
                warn!(
                    target: "strata::rank",
                    term_idx = idx,
                    phrase_length,
                    remaining = handles.remaining(),
                    "Term field handles exhausted, phrase kept whole"
                );
                term_map.push_original(idx);
                continue;
            };

            for (offset_in_phrase, handle) in (0..).zip(block) {
                let mut sub = SimpleTermData::new()
                    .with_weight(weight)
                    .with_unique_id(unique_id);
                let mut sub_field = field;
                sub_field.set_handle(handle);
                sub.push_field(sub_field);

                term_map.push_synthesized(terms.len() as u32);
                terms.push(sub);
                bridge.push(CopyInstruction {
                    original_handle: field.handle(),
                    synthesized_handle: handle,
                    offset_in_phrase,
                });
            }
            split_phrases += 1;
            trace!(
                target: "strata::rank",
                term_idx = idx,
                phrase_length,
                original_handle = field.handle(),
                "Phrase split into single terms"
            );
        }

        debug!(
            target: "strata::rank",
            field_id = ?field_id,
            original_terms = num_terms,
            public_terms = term_map.len(),
            split_phrases,
            first_synthesized_handle = handles.first(),
            "Phrase splitter constructed"
        );

        PhraseSplitter {
            env,
            field_id,
            terms,
            term_map,
            bridge,
            handles,
            split_phrases,
        }
    }

    /// Wrapped environment
    pub fn inner(&self) -> &'a E {
        self.env
    }

    /// Field whose phrases are split (`None` when splitting is disabled)
    pub fn field_id(&self) -> Option<FieldId> {
        self.field_id
    }

    /// Origin of public term `idx`
    pub fn slot(&self, idx: u32) -> Option<TermSlot> {
        self.term_map.get(idx)
    }

    /// Synthesized terms in creation order
    pub fn synthesized_terms(&self) -> &[SimpleTermData] {
        &self.terms
    }

    /// Per-document copy instructions in creation order
    pub fn copy_instructions(&self) -> &[CopyInstruction] {
        self.bridge.instructions()
    }

    /// Number of phrases that were split
    pub fn split_phrase_count(&self) -> u32 {
        self.split_phrases
    }

    /// First handle not used by the wrapped environment or by this splitter
    ///
    /// `ILLEGAL_HANDLE` when no handle is left.
    pub fn next_free_handle(&self) -> TermFieldHandle {
        self.handles.peek()
    }

    /// Reserve a match data slot for every synthesized handle
    ///
    /// Call once per query, after the wrapped environment's handles have been
    /// allocated in `layout` and before match data is created from it.
    pub fn reserve_handles(&self, layout: &mut MatchDataLayout) {
        for term in &self.terms {
            for field in term.fields() {
                layout.reserve_term_field(field.handle(), field.field_id());
            }
        }
    }

    /// Populate synthesized terms' match data for the current document
    ///
    /// `md` must be the match data bound for the document about to be
    /// scored. Running it again on the same match data changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `UnknownHandle` if `md` was not created from a layout
    /// prepared with [`reserve_handles`](Self::reserve_handles).
    pub fn update_match_data(&self, md: &mut MatchData) -> Result<()> {
        self.bridge.apply(md)
    }
}

impl<'a, E: QueryEnvironment + ?Sized> QueryEnvironment for PhraseSplitter<'a, E> {
    type Term<'t> = SplitTerm<'t, E::Term<'t>>
    where
        Self: 't;

    fn term_count(&self) -> u32 {
        self.term_map.len()
    }

    fn term(&self, idx: u32) -> Option<Self::Term<'_>> {
        match self.term_map.get(idx)? {
            TermSlot::Original(i) => self.env.term(i).map(SplitTerm::Original),
            TermSlot::Synthesized(i) => self.terms.get(i as usize).map(SplitTerm::Synthesized),
        }
    }

    fn properties(&self) -> &Properties {
        self.env.properties()
    }

    fn location(&self) -> &Location {
        self.env.location()
    }

    fn attribute_context(&self) -> &dyn AttributeContext {
        self.env.attribute_context()
    }

    fn index_environment(&self) -> &dyn IndexEnvironment {
        self.env.index_environment()
    }

    fn average_field_length(&self, field_name: &str) -> f64 {
        self.env.average_field_length(field_name)
    }
}
