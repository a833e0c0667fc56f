//! # Snapshot Codec
//!
//! Whole-database persistence: one JSON artifact holding the three
//! collections and the id allocator's counter.
//!
//! ## Save Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Atomic Save                                       │
//! │                                                                         │
//! │  serialize store ──► write + sync shipping-store.json.tmp ──► rename  │
//! │                                                        over shipping-  │
//! │                                                        store.json      │
//! │                                                                         │
//! │  A crash before the rename leaves the previous good snapshot intact.   │
//! │  There is no partial or incremental write.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Load Path
//! Missing file means first run: an empty store, not an error. A file
//! that exists but cannot be parsed is reported as [`SnapshotError::Decode`]
//! so the caller can choose between surfacing it and starting empty.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use shipstore_core::{Package, Transaction, User};

use crate::allocator::UserIdAllocator;
use crate::error::{SnapshotError, SnapshotResult};
use crate::store::ShippingStore;

/// On-disk shape of the store.
///
/// Field order matches the persisted layout: packages, users,
/// transactions, then the allocator counter.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    packages: Vec<Package>,
    users: Vec<User>,
    transactions: Vec<Transaction>,
    /// The id the allocator will hand out next.
    next_user_id: u32,
}

impl Snapshot {
    fn capture(store: &ShippingStore) -> Self {
        Snapshot {
            packages: store.packages().to_vec(),
            users: store.users().to_vec(),
            transactions: store.transactions().to_vec(),
            next_user_id: store.allocator.peek(),
        }
    }

    fn into_store(self) -> ShippingStore {
        ShippingStore::from_parts(
            self.packages,
            self.users,
            self.transactions,
            UserIdAllocator::resume(self.next_user_id),
        )
    }
}

/// Loads the store from a snapshot file.
///
/// ## Returns
/// * `Ok(store)` - Parsed snapshot, or a fresh empty store if the file
///   does not exist (first run)
/// * `Err(SnapshotError)` - The file exists but could not be read or
///   parsed
pub fn load(path: &Path) -> SnapshotResult<ShippingStore> {
    if !path.exists() {
        info!(path = %path.display(), "No snapshot file, starting with an empty store");
        return Ok(ShippingStore::new());
    }

    let contents = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: Snapshot =
        serde_json::from_str(&contents).map_err(|source| SnapshotError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        packages = snapshot.packages.len(),
        users = snapshot.users.len(),
        transactions = snapshot.transactions.len(),
        "Loaded snapshot"
    );
    Ok(snapshot.into_store())
}

/// Saves the store to a snapshot file, overwriting any previous artifact.
///
/// The JSON is written to a sibling `.tmp` file, flushed to disk with
/// `sync_all`, and then renamed into place, so an interrupted save never
/// corrupts the last good snapshot and the rename only ever publishes
/// fully-written content. Parent directories are created as needed.
/// Errors are surfaced to the caller, never retried.
pub fn save(store: &ShippingStore, path: &Path) -> SnapshotResult<()> {
    let io_err = |source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let json =
        serde_json::to_string_pretty(&Snapshot::capture(store)).map_err(SnapshotError::Encode)?;

    let tmp = tmp_path(path);
    debug!(path = %tmp.display(), "Writing snapshot temp file");
    let mut tmp_file = File::create(&tmp).map_err(io_err)?;
    tmp_file.write_all(json.as_bytes()).map_err(io_err)?;
    // Durable before the rename publishes it.
    tmp_file.sync_all().map_err(io_err)?;
    drop(tmp_file);
    fs::rename(&tmp, path).map_err(io_err)?;

    info!(
        path = %path.display(),
        packages = store.package_count(),
        users = store.user_count(),
        transactions = store.transaction_count(),
        "Saved snapshot"
    );
    Ok(())
}

/// Sibling temp path: `shipping-store.json` -> `shipping-store.json.tmp`.
/// Staying in the same directory keeps the rename atomic on POSIX
/// filesystems.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shipstore_core::{DrumMaterial, MailingClass, PackageKind, Specification};

    fn populated_store() -> ShippingStore {
        let mut store = ShippingStore::new();
        store
            .add_package(Package::new(
                "TRK01",
                Specification::Fragile,
                MailingClass::Priority,
                PackageKind::Envelope { height: 10, width: 5 },
            ))
            .unwrap();
        store
            .add_package(Package::new(
                "BOX01",
                Specification::Books,
                MailingClass::Ground,
                PackageKind::Box {
                    largest_dimension: 24,
                    volume: 4000,
                },
            ))
            .unwrap();
        store
            .add_package(Package::new(
                "CRT01",
                Specification::NotApplicable,
                MailingClass::Retail,
                PackageKind::Crate {
                    max_load_weight: 120.5,
                    content: "machine parts".to_string(),
                },
            ))
            .unwrap();
        store
            .add_package(Package::new(
                "DRM01",
                Specification::DoNotBend,
                MailingClass::Metro,
                PackageKind::Drum {
                    material: DrumMaterial::Fiber,
                    diameter: 18.25,
                },
            ))
            .unwrap();
        store
            .add_customer("Ann", "Lee", "555-1111", "1 Main St")
            .unwrap();
        store
            .add_employee("Bob", "Roe", 123_456_789, 3000.0, 5000)
            .unwrap();

        let now = Utc::now();
        store
            .deliver_package(1, 2, "BOX01", now, now, 12.50)
            .unwrap();
        store
    }

    #[test]
    fn test_load_missing_file_gives_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipping-store.json");

        let store = load(&path).unwrap();
        assert_eq!(store.package_count(), 0);
        assert_eq!(store.user_count(), 0);
        assert_eq!(store.transaction_count(), 0);
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipping-store.json");

        let store = populated_store();
        save(&store, &path).unwrap();
        let loaded = load(&path).unwrap();

        // Every variant, float, and timestamp survives intact.
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_allocator_continues_after_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipping-store.json");

        let mut store = ShippingStore::new();
        let first = store
            .add_customer("Ann", "Lee", "555-1111", "1 Main St")
            .unwrap();
        let second = store
            .add_customer("Cam", "Diaz", "555-3333", "3 Elm St")
            .unwrap();
        save(&store, &path).unwrap();

        let mut loaded = load(&path).unwrap();
        let third = loaded
            .add_customer("Dee", "Foy", "555-4444", "4 Pine St")
            .unwrap();

        assert_eq!((first, second, third), (1, 2, 3));
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipping-store.json");

        let mut store = ShippingStore::new();
        save(&store, &path).unwrap();

        store
            .add_customer("Ann", "Lee", "555-1111", "1 Main St")
            .unwrap();
        save(&store, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.user_count(), 1);

        // No stray temp file left behind.
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn test_corrupt_snapshot_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipping-store.json");
        fs::write(&path, "not json {").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Decode { .. }));
    }

    #[test]
    fn test_unreadable_snapshot_is_an_io_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipping-store.json");
        // A directory where the file should be: exists, but unreadable.
        fs::create_dir(&path).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
        assert!(err.to_string().contains("shipping-store.json"));
    }

    #[test]
    fn test_failed_save_reports_the_target_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, "").unwrap();

        // Parent creation must fail: "occupied" is a regular file.
        let path = blocker.join("shipping-store.json");
        let err = save(&ShippingStore::new(), &path).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
        assert!(err.to_string().contains("shipping-store.json"));
    }

    #[test]
    fn test_saved_artifact_is_complete_and_parseable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipping-store.json");

        let store = populated_store();
        save(&store, &path).unwrap();

        // The published artifact is whole JSON, not a partial write.
        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.get("packages").is_some());
        assert!(value.get("next_user_id").is_some());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/shipping-store.json");

        save(&ShippingStore::new(), &path).unwrap();
        assert!(path.exists());
    }
}
