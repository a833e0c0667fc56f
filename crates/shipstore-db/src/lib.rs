//! # shipstore-db: Store & Persistence Layer
//!
//! This crate provides the in-memory record store of the shipping store
//! software and its whole-database snapshot persistence.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shipstore Data Flow                              │
//! │                                                                         │
//! │  CLI operation (deliver package)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shipstore-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  StoreState   │    │ ShippingStore │    │   Snapshot   │  │   │
//! │  │   │  (state.rs)   │    │   (store/)    │    │ (snapshot.rs)│  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Arc<Mutex<_>> │───►│ packages      │◄───│ load / save  │  │   │
//! │  │   │ single writer │    │ users         │    │ temp+rename  │  │   │
//! │  │   │               │    │ transactions  │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Snapshot file (one JSON artifact)               │   │
//! │  │  shipping-store.json                                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `ShippingStore` and its operations, split per entity
//! - [`allocator`] - Monotonic user-id allocation
//! - [`snapshot`] - Snapshot codec (load-or-create-empty, atomic save)
//! - [`state`] - The `StoreState` mutual-exclusion wrapper
//! - [`error`] - Store and snapshot error types
//!
//! ## Usage
//!
//! ```rust
//! use shipstore_core::{MailingClass, Package, PackageKind, Specification};
//! use shipstore_db::ShippingStore;
//!
//! let mut store = ShippingStore::new();
//! store.add_package(Package::new(
//!     "TRK01",
//!     Specification::Fragile,
//!     MailingClass::Priority,
//!     PackageKind::Envelope { height: 10, width: 5 },
//! ))?;
//!
//! let customer = store.add_customer("Ann", "Lee", "555-1111", "1 Main St")?;
//! assert_eq!(customer, 1);
//! # Ok::<(), shipstore_db::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocator;
pub mod error;
pub mod snapshot;
pub mod state;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use allocator::UserIdAllocator;
pub use error::{SnapshotError, StoreError};
pub use state::StoreState;
pub use store::ShippingStore;
