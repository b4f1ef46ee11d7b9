//! Handle allocation for synthesized terms
//!
//! Synthesized terms need match data slots that cannot collide with any slot
//! used by the wrapped environment. The allocator scans every original term
//! field handle once and then hands out handles strictly above the maximum.
//! Scope is one splitter instance; there is no shared counter.
//!
//! `ILLEGAL_HANDLE` is never handed out. Once the handles below it are used
//! up, allocation fails instead of wrapping.

use std::ops::Range;
use strata_core::{QueryEnvironment, TermData, TermFieldHandle, ILLEGAL_HANDLE};

/// Strictly increasing handle source above a set of used handles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleAllocator {
    first: TermFieldHandle,
    next: TermFieldHandle,
}

impl HandleAllocator {
    /// Allocator starting above every handle in `used`
    ///
    /// `ILLEGAL_HANDLE` entries are ignored. With no usable handle the
    /// allocator starts at 0.
    pub fn above<I>(used: I) -> Self
    where
        I: IntoIterator<Item = TermFieldHandle>,
    {
        Self::above_max(used.into_iter().filter(|&h| h != ILLEGAL_HANDLE).max())
    }

    /// Allocator starting above every term field handle of `env`
    ///
    /// Duplicate or sparse handles in `env` do not matter; only the maximum
    /// is used.
    pub fn for_environment<E: QueryEnvironment + ?Sized>(env: &E) -> Self {
        let max = (0..env.term_count())
            .filter_map(|i| env.term(i))
            .filter_map(|term| {
                term.fields()
                    .iter()
                    .map(|f| f.handle())
                    .filter(|&h| h != ILLEGAL_HANDLE)
                    .max()
            })
            .max();
        Self::above_max(max)
    }

    // max < ILLEGAL_HANDLE, so max + 1 cannot overflow
    fn above_max(max: Option<TermFieldHandle>) -> Self {
        let first = max.map_or(0, |max| max + 1);
        HandleAllocator { first, next: first }
    }

    /// Hand out the next free handle
    ///
    /// Returns `None` when every handle below `ILLEGAL_HANDLE` is taken.
    pub fn allocate(&mut self) -> Option<TermFieldHandle> {
        self.allocate_range(1).map(|range| range.start)
    }

    /// Hand out `count` consecutive free handles, or none at all
    ///
    /// Returns `None` and leaves the allocator unchanged when fewer than
    /// `count` handles remain.
    pub fn allocate_range(&mut self, count: u32) -> Option<Range<TermFieldHandle>> {
        let end = self
            .next
            .checked_add(count)
            .filter(|&end| end <= ILLEGAL_HANDLE)?;
        let range = self.next..end;
        self.next = end;
        Some(range)
    }

    /// Number of handles that can still be handed out
    pub fn remaining(&self) -> u32 {
        ILLEGAL_HANDLE - self.next
    }

    /// First handle this allocator handed out (or will hand out)
    pub fn first(&self) -> TermFieldHandle {
        self.first
    }

    /// Handle the next call to [`allocate`](Self::allocate) returns
    ///
    /// `ILLEGAL_HANDLE` once the handle space is exhausted.
    pub fn peek(&self) -> TermFieldHandle {
        self.next
    }

    /// Number of handles handed out so far
    pub fn allocated(&self) -> u32 {
        self.next - self.first
    }
}
