//! # Validation Module
//!
//! Field-level invariant checks for the shipping store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input edge (CLI)                                             │
//! │  ├── Enumerated fields parsed into typed enums (FromStr)               │
//! │  └── Re-prompt on bad input                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store operations                                             │
//! │  └── THIS MODULE: numeric and string invariants at insertion           │
//! │                                                                         │
//! │  Enumerated values cannot reach the store in an illegal state:         │
//! │  the type system carries that invariant.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_TRACKING_NUMBER_LEN, SSN_MAX, SSN_MIN};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a package tracking number.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 5 characters
pub fn validate_tracking_number(tracking_number: &str) -> ValidationResult<()> {
    let tracking_number = tracking_number.trim();

    if tracking_number.is_empty() {
        return Err(ValidationError::Required {
            field: "tracking number".to_string(),
        });
    }

    if tracking_number.chars().count() > MAX_TRACKING_NUMBER_LEN {
        return Err(ValidationError::TooLong {
            field: "tracking number".to_string(),
            max: MAX_TRACKING_NUMBER_LEN,
        });
    }

    Ok(())
}

/// Validates a person name (first or last).
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a non-negative dollar or measurement amount.
///
/// ## Rules
/// - Must be finite (NaN and infinities are rejected)
/// - Must be >= 0.0 (zero is allowed)
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a transaction price.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    validate_non_negative("price", price)
}

/// Validates an employee's monthly salary.
pub fn validate_salary(salary: f64) -> ValidationResult<()> {
    validate_non_negative("monthly salary", salary)
}

/// Validates a crate's maximum load weight.
pub fn validate_load_weight(weight: f64) -> ValidationResult<()> {
    validate_non_negative("load weight", weight)
}

/// Validates a drum's diameter.
pub fn validate_diameter(diameter: f64) -> ValidationResult<()> {
    validate_non_negative("diameter", diameter)
}

/// Validates a social security number.
///
/// ## Rules
/// - Must be exactly nine digits (100000000 - 999999999)
pub fn validate_ssn(ssn: u32) -> ValidationResult<()> {
    if !(SSN_MIN..=SSN_MAX).contains(&ssn) {
        return Err(ValidationError::OutOfRange {
            field: "ssn".to_string(),
            min: SSN_MIN as i64,
            max: SSN_MAX as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tracking_number() {
        assert!(validate_tracking_number("TRK01").is_ok());
        assert!(validate_tracking_number("A").is_ok());
        assert!(validate_tracking_number("12345").is_ok());

        assert!(validate_tracking_number("").is_err());
        assert!(validate_tracking_number("   ").is_err());
        assert!(validate_tracking_number("123456").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("first name", "Ann").is_ok());
        assert!(validate_name("first name", "").is_err());
        assert!(validate_name("last name", "  ").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(12.50).is_ok());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());

        assert!(validate_salary(3000.0).is_ok());
        assert!(validate_salary(-1.0).is_err());

        assert!(validate_load_weight(120.5).is_ok());
        assert!(validate_diameter(-2.0).is_err());
    }

    #[test]
    fn test_validate_ssn() {
        assert!(validate_ssn(123_456_789).is_ok());
        assert!(validate_ssn(100_000_000).is_ok());
        assert!(validate_ssn(999_999_999).is_ok());

        assert!(validate_ssn(99_999_999).is_err()); // eight digits
        assert!(validate_ssn(0).is_err());
    }
}
