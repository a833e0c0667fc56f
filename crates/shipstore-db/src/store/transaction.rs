//! # Delivery & Transaction History
//!
//! The one multi-entity operation in the store: delivering a package.
//!
//! ## Delivery Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      deliver_package                                    │
//! │                                                                         │
//! │  customer exists? ──no──► Err(CustomerNotFound)   (nothing changed)    │
//! │       │ yes                                                             │
//! │  employee exists? ──no──► Err(EmployeeNotFound)   (nothing changed)    │
//! │       │ yes                                                             │
//! │  package exists?  ──no──► Err(PackageNotFound)    (nothing changed)    │
//! │       │ yes                                                             │
//! │  price >= 0?      ──no──► Err(NegativePrice)      (nothing changed)    │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  remove package from inventory AND append transaction                  │
//! │                                                                         │
//! │  Every check runs before the first mutation, so the operation is       │
//! │  atomic from the caller's point of view.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use tracing::info;

use shipstore_core::{report, Transaction};

use crate::error::{StoreError, StoreResult};
use crate::store::ShippingStore;

impl ShippingStore {
    /// Delivers a package: removes it from inventory and records the
    /// shipping transaction.
    ///
    /// ## Returns
    /// * `Ok(())` - Transaction appended, package removed
    /// * `Err(StoreError::CustomerNotFound)` - No user with `customer_id`
    /// * `Err(StoreError::EmployeeNotFound)` - No user with `employee_id`
    /// * `Err(StoreError::PackageNotFound)` - Tracking number not in
    ///   inventory (including packages already delivered)
    /// * `Err(StoreError::NegativePrice)` - Price below zero
    ///
    /// On any error, neither collection is touched.
    pub fn deliver_package(
        &mut self,
        customer_id: u32,
        employee_id: u32,
        tracking_number: &str,
        shipping_date: DateTime<Utc>,
        delivery_date: DateTime<Utc>,
        price: f64,
    ) -> StoreResult<()> {
        if !self.user_exists(customer_id) {
            return Err(StoreError::CustomerNotFound(customer_id));
        }
        if !self.user_exists(employee_id) {
            return Err(StoreError::EmployeeNotFound(employee_id));
        }
        if !self.package_exists(tracking_number) {
            return Err(StoreError::PackageNotFound(tracking_number.to_string()));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(StoreError::NegativePrice(price));
        }

        // All checks passed; the two mutations below cannot fail.
        self.packages.retain(|p| p.tracking_number != tracking_number);
        self.transactions.push(Transaction {
            customer_id,
            employee_id,
            tracking_number: tracking_number.to_string(),
            shipping_date,
            delivery_date,
            price,
        });

        info!(
            customer_id,
            employee_id,
            tracking_number = %tracking_number,
            price,
            "Package delivered"
        );
        Ok(())
    }

    /// Renders the transaction history as a fixed-column table, in
    /// insertion order.
    pub fn transactions_formatted(&self) -> String {
        report::transactions_table(&self.transactions)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shipstore_core::{MailingClass, Package, PackageKind, Specification};

    fn envelope(tracking: &str) -> Package {
        Package::new(
            tracking,
            Specification::Fragile,
            MailingClass::Priority,
            PackageKind::Envelope { height: 10, width: 5 },
        )
    }

    /// Store with one customer (id 1), one employee (id 2), one package.
    fn seeded_store() -> ShippingStore {
        let mut store = ShippingStore::new();
        store.add_package(envelope("TRK01")).unwrap();
        store
            .add_customer("Ann", "Lee", "555-1111", "1 Main St")
            .unwrap();
        store
            .add_employee("Bob", "Roe", 123_456_789, 3000.0, 5000)
            .unwrap();
        store
    }

    #[test]
    fn test_delivery_moves_package_into_history() {
        let mut store = seeded_store();
        let now = Utc::now();

        store
            .deliver_package(1, 2, "TRK01", now, now, 12.50)
            .unwrap();

        assert!(!store.package_exists("TRK01"));
        assert_eq!(store.package_count(), 0);
        assert_eq!(store.transaction_count(), 1);
        assert_eq!(store.transactions()[0].price, 12.50);
    }

    #[test]
    fn test_delivery_is_atomic_on_referential_failure() {
        let mut store = seeded_store();
        let now = Utc::now();

        let cases: Vec<(u32, u32, &str, f64, StoreError)> = vec![
            (99, 2, "TRK01", 5.0, StoreError::CustomerNotFound(99)),
            (1, 99, "TRK01", 5.0, StoreError::EmployeeNotFound(99)),
            (1, 2, "TRK99", 5.0, StoreError::PackageNotFound("TRK99".to_string())),
            (1, 2, "TRK01", -5.0, StoreError::NegativePrice(-5.0)),
        ];

        for (customer, employee, tracking, price, expected) in cases {
            let err = store
                .deliver_package(customer, employee, tracking, now, now, price)
                .unwrap_err();
            assert_eq!(err, expected);
            // Neither collection changed.
            assert_eq!(store.package_count(), 1);
            assert_eq!(store.transaction_count(), 0);
        }
    }

    #[test]
    fn test_second_delivery_of_same_package_fails() {
        let mut store = seeded_store();
        let now = Utc::now();

        store
            .deliver_package(1, 2, "TRK01", now, now, 12.50)
            .unwrap();

        let err = store
            .deliver_package(1, 2, "TRK01", now, now, 5.0)
            .unwrap_err();
        assert_eq!(err, StoreError::PackageNotFound("TRK01".to_string()));
        assert_eq!(store.transaction_count(), 1);
    }

    /// The end-to-end scenario: add, reject duplicate, register users,
    /// deliver, and observe the terminal package state.
    #[test]
    fn test_full_delivery_scenario() {
        let mut store = ShippingStore::new();
        let now = Utc::now();

        store.add_package(envelope("TRK01")).unwrap();
        assert!(store.package_exists("TRK01"));

        assert!(matches!(
            store.add_package(envelope("TRK01")),
            Err(StoreError::DuplicateTrackingNumber(_))
        ));

        let ann = store
            .add_customer("Ann", "Lee", "555-1111", "1 Main St")
            .unwrap();
        assert_eq!(ann, 1);

        let bob = store
            .add_employee("Bob", "Roe", 123_456_789, 3000.0, 5000)
            .unwrap();
        assert_eq!(bob, 2);

        store
            .deliver_package(ann, bob, "TRK01", now, now, 12.50)
            .unwrap();
        assert!(!store.package_exists("TRK01"));
        assert_eq!(store.transaction_count(), 1);
        assert_eq!(store.transactions()[0].price, 12.50);

        assert!(matches!(
            store.deliver_package(ann, bob, "TRK01", now, now, 5.0),
            Err(StoreError::PackageNotFound(_))
        ));
    }

    #[test]
    fn test_transactions_formatted() {
        let mut store = seeded_store();
        let now = Utc::now();
        store
            .deliver_package(1, 2, "TRK01", now, now, 12.50)
            .unwrap();

        let table = store.transactions_formatted();
        assert!(table.contains("CUSTOMER ID"));
        assert!(table.contains("TRK01"));
        assert!(table.contains("12.50"));
    }
}
