//! # Package Operations
//!
//! Inventory operations on the package collection.
//!
//! ## Key Operations
//! - Add with duplicate-tracking-number rejection
//! - Linear-scan lookup by tracking number
//! - Delete by tracking number
//! - Formatted inventory report

use tracing::debug;

use shipstore_core::{report, validation, Package, PackageKind};

use crate::error::{StoreError, StoreResult};
use crate::store::ShippingStore;

impl ShippingStore {
    /// Adds a package to the inventory.
    ///
    /// Validates the tracking number and the variant's floating-point
    /// fields at the point of insertion; enumerated fields are already
    /// typed and need no check. The tracking number is stored in its
    /// trimmed form, so surrounding whitespace never creates a second
    /// identity for the same number.
    ///
    /// ## Returns
    /// * `Ok(())` - Package appended
    /// * `Err(StoreError::DuplicateTrackingNumber)` - Tracking number
    ///   already in inventory; the collection is unchanged
    /// * `Err(StoreError::Validation)` - A field violated an invariant
    pub fn add_package(&mut self, package: Package) -> StoreResult<()> {
        validation::validate_tracking_number(&package.tracking_number)?;
        match &package.kind {
            PackageKind::Crate { max_load_weight, .. } => {
                validation::validate_load_weight(*max_load_weight)?;
            }
            PackageKind::Drum { diameter, .. } => {
                validation::validate_diameter(*diameter)?;
            }
            PackageKind::Envelope { .. } | PackageKind::Box { .. } => {}
        }

        // Stored identity is the trimmed form, same as user names.
        let mut package = package;
        package.tracking_number = package.tracking_number.trim().to_string();

        if self.package_exists(&package.tracking_number) {
            return Err(StoreError::DuplicateTrackingNumber(
                package.tracking_number.clone(),
            ));
        }

        debug!(
            tracking_number = %package.tracking_number,
            kind = package.kind.type_name(),
            "Adding package"
        );
        self.packages.push(package);
        Ok(())
    }

    /// Finds a package by its tracking number.
    pub fn find_package(&self, tracking_number: &str) -> Option<&Package> {
        self.packages
            .iter()
            .find(|p| p.tracking_number == tracking_number)
    }

    /// Returns true if a package with this tracking number is in inventory.
    pub fn package_exists(&self, tracking_number: &str) -> bool {
        self.find_package(tracking_number).is_some()
    }

    /// Removes the package with this tracking number.
    ///
    /// ## Returns
    /// Whether a package was found and removed. Deleting an absent
    /// tracking number is a no-op, not an error.
    pub fn delete_package(&mut self, tracking_number: &str) -> bool {
        let before = self.packages.len();
        self.packages.retain(|p| p.tracking_number != tracking_number);

        let removed = self.packages.len() < before;
        if removed {
            debug!(tracking_number = %tracking_number, "Deleted package");
        }
        removed
    }

    /// Renders the whole inventory as a fixed-column table, one row per
    /// package in insertion order.
    pub fn packages_formatted(&self) -> String {
        report::packages_table(&self.packages)
    }

    /// Renders a single package as a one-row table.
    ///
    /// Returns `None` if the tracking number is not in inventory.
    pub fn package_formatted(&self, tracking_number: &str) -> Option<String> {
        self.find_package(tracking_number)
            .map(|p| report::packages_table(std::slice::from_ref(p)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
