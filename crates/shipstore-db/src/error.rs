//! # Store Error Types
//!
//! Error types for store operations and snapshot persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (shipstore-core)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← identity / referential violations          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller (CLI) displays the message and re-prompts                      │
//! │                                                                         │
//! │  SnapshotError is separate: I/O and codec failures never mix with      │
//! │  domain outcomes.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

use shipstore_core::ValidationError;

// =============================================================================
// Store Error
// =============================================================================

/// Store operation errors.
///
/// Lookups that merely miss return `Option`/`bool`; these variants are
/// the structural and referential violations that must be reported to
/// the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A package with this tracking number is already in inventory.
    #[error("package with tracking number '{0}' already exists")]
    DuplicateTrackingNumber(String),

    /// No user with this id, for an operation that requires one.
    #[error("user {0} not found")]
    UserNotFound(u32),

    /// The id resolved to a user of the other variant.
    ///
    /// ## When This Occurs
    /// - `update_customer` on an employee id
    /// - `update_employee` on a customer id
    #[error("user {id} is a {actual}, expected a {expected}")]
    WrongUserKind {
        id: u32,
        expected: &'static str,
        actual: &'static str,
    },

    /// Delivery referenced a customer id that does not exist.
    #[error("customer {0} not found")]
    CustomerNotFound(u32),

    /// Delivery referenced an employee id that does not exist.
    #[error("employee {0} not found")]
    EmployeeNotFound(u32),

    /// Delivery referenced a tracking number not in inventory.
    #[error("package with tracking number '{0}' not found")]
    PackageNotFound(String),

    /// Delivery price was negative.
    #[error("price cannot be negative (got {0})")]
    NegativePrice(f64),

    /// A field value violated a domain invariant.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Snapshot Error
// =============================================================================

/// Snapshot persistence errors.
///
/// A missing snapshot file on load is NOT an error (first run); these
/// variants cover genuine I/O failures and corrupt artifacts.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading or writing the snapshot file failed.
    #[error("snapshot I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store could not be serialized.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// The snapshot file exists but could not be parsed.
    ///
    /// The caller decides whether to surface this or fall back to an
    /// empty store; the previous artifact is left untouched.
    #[error("failed to decode snapshot {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

// =============================================================================
// Unit Tests
// =============================================================================
