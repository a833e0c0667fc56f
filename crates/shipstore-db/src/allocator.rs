//! # User Id Allocation
//!
//! Monotonic allocation of unique user identifiers.
//!
//! ## Allocation Policy
//! A strictly increasing counter starting at 1. The counter's next value
//! is persisted in the snapshot, so identifiers are never reused across
//! restarts: after a save/load cycle the next allocated id continues
//! from where the previous process stopped.

/// Allocator for unique user ids.
///
/// ## Invariants
/// - `allocate` never returns the same id twice for one allocator lineage
///   (including lineages resumed from a snapshot)
/// - The first id ever allocated is 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdAllocator {
    next_id: u32,
}

impl UserIdAllocator {
    /// Creates a fresh allocator; the first allocated id will be 1.
    pub const fn new() -> Self {
        UserIdAllocator { next_id: 1 }
    }

    /// Resumes an allocator from a persisted counter value.
    pub const fn resume(next_id: u32) -> Self {
        UserIdAllocator { next_id }
    }

    /// The id the next call to [`allocate`](Self::allocate) will return.
    pub const fn peek(&self) -> u32 {
        self.next_id
    }

    /// Allocates and returns the next id.
    pub fn allocate(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for UserIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
