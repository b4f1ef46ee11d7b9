//! Renumbering between public term slots and their origin
//!
//! Each public slot resolves either to an index in the wrapped environment
//! or to an index in the splitter's arena of synthesized terms. Only
//! integer indexes are stored, never references into the arena.

/// Origin of one public term slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermSlot {
    /// Index into the wrapped environment; term and handles unchanged
    Original(u32),
    /// Index into the synthesized term arena
    Synthesized(u32),
}

impl TermSlot {
    /// Index within the collection this slot points into
    pub fn slot_index(&self) -> u32 {
        match *self {
            TermSlot::Original(idx) | TermSlot::Synthesized(idx) => idx,
        }
    }

    /// Whether the slot points into the synthesized term arena
    pub fn is_synthesized(&self) -> bool {
        matches!(self, TermSlot::Synthesized(_))
    }
}

/// Ordered table of public term slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermIndexMap {
    slots: Vec<TermSlot>,
}

impl TermIndexMap {
    /// Create an empty map sized for `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        TermIndexMap {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Append a slot resolving to the wrapped environment's term `idx`
    pub fn push_original(&mut self, idx: u32) {
        self.slots.push(TermSlot::Original(idx));
    }

    /// Append a slot resolving to synthesized term `idx`
    pub fn push_synthesized(&mut self, idx: u32) {
        self.slots.push(TermSlot::Synthesized(idx));
    }

    /// Slot for public index `idx`
    pub fn get(&self, idx: u32) -> Option<TermSlot> {
        self.slots.get(idx as usize).copied()
    }

    /// Number of public slots
    pub fn len(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Check if there are no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in public order
    pub fn slots(&self) -> &[TermSlot] {
        &self.slots
    }
}
