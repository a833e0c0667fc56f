//! # User Operations
//!
//! Registration, lookup, and in-place update of users.
//!
//! ## Key Operations
//! - Add customer / employee (id comes from the allocator)
//! - Lookup and variant predicates (false, not error, when absent)
//! - Variant-specific field updates
//!
//! There is no delete-user operation: users live for the store's
//! lifetime and transactions reference them by id.

use tracing::debug;

use shipstore_core::{report, validation, User, UserRole};

use crate::error::{StoreError, StoreResult};
use crate::store::ShippingStore;

impl ShippingStore {
    /// Registers a new customer and returns the allocated id.
    pub fn add_customer(
        &mut self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
        address: &str,
    ) -> StoreResult<u32> {
        validation::validate_name("first name", first_name)?;
        validation::validate_name("last name", last_name)?;

        let id = self.allocator.allocate();
        debug!(id, first_name, last_name, "Adding customer");

        self.users.push(User {
            id,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            role: UserRole::Customer {
                phone_number: phone_number.to_string(),
                address: address.to_string(),
            },
        });
        Ok(id)
    }

    /// Registers a new employee and returns the allocated id.
    ///
    /// ## Returns
    /// * `Err(StoreError::Validation)` - SSN is not nine digits, or the
    ///   monthly salary is negative
    pub fn add_employee(
        &mut self,
        first_name: &str,
        last_name: &str,
        ssn: u32,
        monthly_salary: f64,
        bank_account_number: u64,
    ) -> StoreResult<u32> {
        validation::validate_name("first name", first_name)?;
        validation::validate_name("last name", last_name)?;
        validation::validate_ssn(ssn)?;
        validation::validate_salary(monthly_salary)?;

        let id = self.allocator.allocate();
        debug!(id, first_name, last_name, "Adding employee");

        self.users.push(User {
            id,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            role: UserRole::Employee {
                ssn,
                monthly_salary,
                bank_account_number,
            },
        });
        Ok(id)
    }

    /// Finds a user by id.
    pub fn find_user(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Returns true if a user with this id is registered.
    pub fn user_exists(&self, id: u32) -> bool {
        self.find_user(id).is_some()
    }

    /// Returns true if the id belongs to a customer. Unknown ids are
    /// simply not customers.
    pub fn is_customer(&self, id: u32) -> bool {
        self.find_user(id).is_some_and(User::is_customer)
    }

    /// Returns true if the id belongs to an employee. Unknown ids are
    /// simply not employees.
    pub fn is_employee(&self, id: u32) -> bool {
        self.find_user(id).is_some_and(User::is_employee)
    }

    /// Replaces the fields of an existing customer.
    ///
    /// ## Returns
    /// * `Err(StoreError::UserNotFound)` - No user with this id
    /// * `Err(StoreError::WrongUserKind)` - The id belongs to an employee
    pub fn update_customer(
        &mut self,
        id: u32,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
        address: &str,
    ) -> StoreResult<()> {
        validation::validate_name("first name", first_name)?;
        validation::validate_name("last name", last_name)?;

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::UserNotFound(id))?;

        if !user.is_customer() {
            return Err(StoreError::WrongUserKind {
                id,
                expected: "Customer",
                actual: user.role.role_name(),
            });
        }

        user.first_name = first_name.trim().to_string();
        user.last_name = last_name.trim().to_string();
        user.role = UserRole::Customer {
            phone_number: phone_number.to_string(),
            address: address.to_string(),
        };
        debug!(id, "Updated customer");
        Ok(())
    }

    /// Replaces the fields of an existing employee.
    ///
    /// ## Returns
    /// * `Err(StoreError::UserNotFound)` - No user with this id
    /// * `Err(StoreError::WrongUserKind)` - The id belongs to a customer
    pub fn update_employee(
        &mut self,
        id: u32,
        first_name: &str,
        last_name: &str,
        ssn: u32,
        monthly_salary: f64,
        bank_account_number: u64,
    ) -> StoreResult<()> {
        validation::validate_name("first name", first_name)?;
        validation::validate_name("last name", last_name)?;
        validation::validate_ssn(ssn)?;
        validation::validate_salary(monthly_salary)?;

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::UserNotFound(id))?;

        if !user.is_employee() {
            return Err(StoreError::WrongUserKind {
                id,
                expected: "Employee",
                actual: user.role.role_name(),
            });
        }

        user.first_name = first_name.trim().to_string();
        user.last_name = last_name.trim().to_string();
        user.role = UserRole::Employee {
            ssn,
            monthly_salary,
            bank_account_number,
        };
        debug!(id, "Updated employee");
        Ok(())
    }

    /// Renders all users as a fixed-column table, in insertion order.
    pub fn users_formatted(&self) -> String {
        report::users_table(&self.users)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_users_allocates_sequential_ids() {
        let mut store = ShippingStore::new();

        let ann = store
            .add_customer("Ann", "Lee", "555-1111", "1 Main St")
            .unwrap();
        let bob = store
            .add_employee("Bob", "Roe", 123_456_789, 3000.0, 5000)
            .unwrap();

        assert_eq!(ann, 1);
        assert_eq!(bob, 2);
        assert_eq!(store.user_count(), 2);
    }

    #[test]
    fn test_user_ids_never_repeat() {
        let mut store = ShippingStore::new();
        let mut seen = Vec::new();
        for i in 0..20 {
            let id = store
                .add_customer(&format!("User{}", i), "Test", "555", "addr")
                .unwrap();
            assert!(!seen.contains(&id));
            seen.push(id);
        }
    }

    #[test]
    fn test_variant_predicates() {
        let mut store = ShippingStore::new();
        let customer = store
            .add_customer("Ann", "Lee", "555-1111", "1 Main St")
            .unwrap();
        let employee = store
            .add_employee("Bob", "Roe", 123_456_789, 3000.0, 5000)
            .unwrap();

        assert!(store.is_customer(customer));
        assert!(!store.is_employee(customer));
        assert!(store.is_employee(employee));
        assert!(!store.is_customer(employee));

        // Unknown id: false, not an error.
        assert!(!store.is_customer(999));
        assert!(!store.is_employee(999));
        assert!(!store.user_exists(999));
    }

    #[test]
    fn test_update_customer() {
        let mut store = ShippingStore::new();
        let id = store
            .add_customer("Ann", "Lee", "555-1111", "1 Main St")
            .unwrap();

        store
            .update_customer(id, "Anna", "Lee", "555-2222", "2 Oak Ave")
            .unwrap();

        let user = store.find_user(id).unwrap();
        assert_eq!(user.first_name, "Anna");
        match &user.role {
            UserRole::Customer { phone_number, address } => {
                assert_eq!(phone_number, "555-2222");
                assert_eq!(address, "2 Oak Ave");
            }
            UserRole::Employee { .. } => panic!("variant changed"),
        }
    }

    #[test]
    fn test_update_employee() {
        let mut store = ShippingStore::new();
        let id = store
            .add_employee("Bob", "Roe", 123_456_789, 3000.0, 5000)
            .unwrap();

        store
            .update_employee(id, "Bob", "Roe", 987_654_321, 3500.0, 6000)
            .unwrap();

        match &store.find_user(id).unwrap().role {
            UserRole::Employee {
                ssn,
                monthly_salary,
                bank_account_number,
            } => {
                assert_eq!(*ssn, 987_654_321);
                assert_eq!(*monthly_salary, 3500.0);
                assert_eq!(*bank_account_number, 6000);
            }
            UserRole::Customer { .. } => panic!("variant changed"),
        }
    }

    #[test]
    fn test_update_wrong_kind_is_rejected() {
        let mut store = ShippingStore::new();
        let customer = store
            .add_customer("Ann", "Lee", "555-1111", "1 Main St")
            .unwrap();
        let employee = store
            .add_employee("Bob", "Roe", 123_456_789, 3000.0, 5000)
            .unwrap();

        assert!(matches!(
            store.update_customer(employee, "X", "Y", "555", "addr"),
            Err(StoreError::WrongUserKind { .. })
        ));
        assert!(matches!(
            store.update_employee(customer, "X", "Y", 123_456_789, 1.0, 1),
            Err(StoreError::WrongUserKind { .. })
        ));
        assert!(matches!(
            store.update_customer(999, "X", "Y", "555", "addr"),
            Err(StoreError::UserNotFound(999))
        ));
    }

    #[test]
    fn test_employee_field_validation() {
        let mut store = ShippingStore::new();

        // Eight-digit SSN
        assert!(matches!(
            store.add_employee("Bob", "Roe", 12_345_678, 3000.0, 5000),
            Err(StoreError::Validation(_))
        ));
        // Negative salary
        assert!(matches!(
            store.add_employee("Bob", "Roe", 123_456_789, -1.0, 5000),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(store.user_count(), 0);
    }

    #[test]
    fn test_users_formatted() {
        let mut store = ShippingStore::new();
        store
            .add_customer("Ann", "Lee", "555-1111", "1 Main St")
            .unwrap();

        let table = store.users_formatted();
        assert!(table.contains("USER TYPE"));
        assert!(table.contains("Customer"));
        assert!(table.contains("Ann"));
    }
}
