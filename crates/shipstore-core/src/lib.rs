//! # shipstore-core: Pure Domain Model for the Shipping Store
//!
//! This crate is the **heart** of the shipping store software. It defines the
//! entity model and the invariant checks as pure code with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shipstore Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      CLI shell (apps/cli)                       │   │
//! │  │    menu loop ──► input gathering ──► store operations           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shipstore-db (Store Layer)                   │   │
//! │  │    ShippingStore, UserIdAllocator, snapshot codec               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shipstore-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐                 │   │
//! │  │   │   types   │  │ validation│  │   report   │                 │   │
//! │  │   │  Package  │  │   rules   │  │   tables   │                 │   │
//! │  │   │  User     │  │   checks  │  │            │                 │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILE SYSTEM • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (Package, User, Transaction)
//! - [`validation`] - Field-level invariant checks
//! - [`error`] - Domain error types
//! - [`report`] - Fixed-width report formatting

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shipstore_core::Package` instead of
// `use shipstore_core::types::Package`

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a package tracking number, in characters.
///
/// Tracking numbers are caller-chosen short strings; the store rejects
/// anything longer at the point of insertion.
pub const MAX_TRACKING_NUMBER_LEN: usize = 5;

/// Smallest legal social security number (nine digits).
pub const SSN_MIN: u32 = 100_000_000;

/// Largest legal social security number (nine digits).
pub const SSN_MAX: u32 = 999_999_999;
