//! # Store State
//!
//! The single mutual-exclusion boundary around the store.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. UI shells may trigger operations from more than one thread
//! 2. Every operation reads-then-writes the same collections
//! 3. Only one operation may touch the store at a time
//!
//! All operations are short and synchronous, so a plain `Mutex` (not a
//! `RwLock`) is the whole concurrency story: mutations are serialized,
//! and there is nothing long-running to overlap with.

use std::sync::{Arc, Mutex};

use crate::store::ShippingStore;

/// Shared handle to the store for multi-threaded callers.
///
/// Cloning the handle clones the `Arc`; all clones guard the same store.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<ShippingStore>>,
}

impl StoreState {
    /// Wraps a store (typically fresh from [`crate::snapshot::load`]).
    pub fn new(store: ShippingStore) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// # use shipstore_db::{ShippingStore, StoreState};
    /// let state = StoreState::new(ShippingStore::new());
    /// let count = state.with_store(|s| s.package_count());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ShippingStore) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with exclusive write access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// # use shipstore_db::{ShippingStore, StoreState};
    /// let state = StoreState::new(ShippingStore::new());
    /// let id = state.with_store_mut(|s| {
    ///     s.add_customer("Ann", "Lee", "555-1111", "1 Main St")
    /// })?;
    /// assert_eq!(id, 1);
    /// # Ok::<(), shipstore_db::StoreError>(())
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ShippingStore) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(ShippingStore::new())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_with_store_mut_applies_changes() {
        let state = StoreState::new(ShippingStore::new());

        let id = state
            .with_store_mut(|s| s.add_customer("Ann", "Lee", "555-1111", "1 Main St"))
            .unwrap();
        assert_eq!(id, 1);

        let count = state.with_store(|s| s.user_count());
        assert_eq!(count, 1);
    }

    #[test]
    fn test_concurrent_adds_never_share_an_id() {
        let state = StoreState::new(ShippingStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let state = state.clone();
                thread::spawn(move || {
                    state.with_store_mut(|s| {
                        s.add_customer(&format!("User{}", i), "Test", "555", "addr")
                    })
                })
            })
            .collect();

        let mut ids: Vec<u32> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);

        let count = state.with_store(|s| s.user_count());
        assert_eq!(count, 8);
    }
}
