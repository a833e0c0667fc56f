//! # Store Module
//!
//! The `ShippingStore` and its operations, split per entity family.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ShippingStore                                     │
//! │                                                                         │
//! │  The store is the SOLE mutator of its three collections.               │
//! │                                                                         │
//! │  packages:     Vec<Package>      inventory, keyed by tracking number   │
//! │  users:        Vec<User>         append + in-place update, no delete   │
//! │  transactions: Vec<Transaction>  append-only history                   │
//! │  allocator:    UserIdAllocator   monotonic user ids                    │
//! │                                                                         │
//! │  Insertion order is preserved; lookups are linear scans over small     │
//! │  collections.                                                          │
//! │                                                                         │
//! │  Package lifecycle:                                                     │
//! │    Created ──(delivered)──► Removed + Transaction recorded             │
//! │    Created ──(deleted)────► Removed                                    │
//! │  Both transitions are terminal.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations by File
//!
//! - [`package`] - Package inventory operations
//! - [`user`] - User registration, lookup, and update
//! - [`transaction`] - The delivery transition and transaction history

pub mod package;
pub mod transaction;
pub mod user;

use shipstore_core::{Package, Transaction, User};

use crate::allocator::UserIdAllocator;

/// The in-memory record store: packages awaiting shipment, registered
/// users, and the completed transaction history.
///
/// The on-disk shape lives in [`crate::snapshot`]; this struct is never
/// serialized directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShippingStore {
    pub(crate) packages: Vec<Package>,
    pub(crate) users: Vec<User>,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) allocator: UserIdAllocator,
}

impl ShippingStore {
    /// Creates an empty store with a fresh id allocator.
    pub fn new() -> Self {
        ShippingStore {
            packages: Vec::new(),
            users: Vec::new(),
            transactions: Vec::new(),
            allocator: UserIdAllocator::new(),
        }
    }

    /// Reassembles a store from its constituent parts (snapshot load).
    pub(crate) fn from_parts(
        packages: Vec<Package>,
        users: Vec<User>,
        transactions: Vec<Transaction>,
        allocator: UserIdAllocator,
    ) -> Self {
        ShippingStore {
            packages,
            users,
            transactions,
            allocator,
        }
    }

    /// Number of packages currently in inventory.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of recorded transactions.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Read-only view of the inventory, in insertion order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Read-only view of the users, in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Read-only view of the transaction history, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
