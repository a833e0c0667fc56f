//! # Domain Types
//!
//! Core entity types for the shipping store.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Package      │   │      User       │   │  Transaction    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  tracking_number│   │  id (u32)       │   │  customer_id    │       │
//! │  │  specification  │   │  first_name     │   │  employee_id    │       │
//! │  │  mailing_class  │   │  last_name      │   │  tracking_number│       │
//! │  │  kind (variant) │   │  role (variant) │   │  dates, price   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  PackageKind: Envelope │ Box │ Crate │ Drum                            │
//! │  UserRole:    Customer │ Employee                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! - Packages: `tracking_number` - caller-chosen short string, unique in
//!   inventory at any time
//! - Users: `id` - allocator-assigned integer, unique for the store lifetime

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Specification
// =============================================================================

/// Handling specification stamped on a package.
///
/// One of a closed set; anything else is rejected at the input edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specification {
    Fragile,
    Books,
    Catalogs,
    DoNotBend,
    /// "N/A" - no special handling.
    NotApplicable,
}

impl Specification {
    /// All accepted spellings, for error messages and menu prompts.
    pub const ALLOWED: [&'static str; 5] = ["Fragile", "Books", "Catalogs", "Do-not-bend", "N/A"];

    /// The canonical spelling used in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Specification::Fragile => "Fragile",
            Specification::Books => "Books",
            Specification::Catalogs => "Catalogs",
            Specification::DoNotBend => "Do-not-bend",
            Specification::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so report column widths apply
        f.pad(self.as_str())
    }
}

impl FromStr for Specification {
    type Err = ValidationError;

    /// Case-insensitive parse, matching the acceptance rules of the
    /// original menu prompt.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fragile" => Ok(Specification::Fragile),
            "books" => Ok(Specification::Books),
            "catalogs" => Ok(Specification::Catalogs),
            "do-not-bend" => Ok(Specification::DoNotBend),
            "n/a" => Ok(Specification::NotApplicable),
            _ => Err(ValidationError::NotAllowed {
                field: "specification".to_string(),
                allowed: Self::ALLOWED.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Mailing Class
// =============================================================================

/// Mailing class a package ships under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailingClass {
    FirstClass,
    Priority,
    Retail,
    Ground,
    Metro,
}

impl MailingClass {
    /// All accepted spellings, for error messages and menu prompts.
    pub const ALLOWED: [&'static str; 5] = ["First-Class", "Priority", "Retail", "Ground", "Metro"];

    /// The canonical spelling used in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MailingClass::FirstClass => "First-Class",
            MailingClass::Priority => "Priority",
            MailingClass::Retail => "Retail",
            MailingClass::Ground => "Ground",
            MailingClass::Metro => "Metro",
        }
    }
}

impl fmt::Display for MailingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MailingClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-class" => Ok(MailingClass::FirstClass),
            "priority" => Ok(MailingClass::Priority),
            "retail" => Ok(MailingClass::Retail),
            "ground" => Ok(MailingClass::Ground),
            "metro" => Ok(MailingClass::Metro),
            _ => Err(ValidationError::NotAllowed {
                field: "mailing class".to_string(),
                allowed: Self::ALLOWED.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Drum Material
// =============================================================================

/// Material a drum is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrumMaterial {
    Plastic,
    Fiber,
}

impl DrumMaterial {
    pub const ALLOWED: [&'static str; 2] = ["Plastic", "Fiber"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            DrumMaterial::Plastic => "Plastic",
            DrumMaterial::Fiber => "Fiber",
        }
    }
}

impl fmt::Display for DrumMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DrumMaterial {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plastic" => Ok(DrumMaterial::Plastic),
            "fiber" => Ok(DrumMaterial::Fiber),
            _ => Err(ValidationError::NotAllowed {
                field: "material".to_string(),
                allowed: Self::ALLOWED.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Package
// =============================================================================

/// Variant-specific payload of a package.
///
/// Non-negative integer dimensions are enforced by the unsigned types;
/// the floating-point fields are validated when the package enters the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum PackageKind {
    Envelope {
        /// Height in inches.
        height: u32,
        /// Width in inches.
        width: u32,
    },
    Box {
        /// Largest dimension in inches.
        largest_dimension: u32,
        /// Volume in cubic inches.
        volume: u32,
    },
    Crate {
        /// Maximum load weight in pounds.
        max_load_weight: f64,
        /// Free-text description of the contents.
        content: String,
    },
    Drum {
        material: DrumMaterial,
        /// Diameter in inches.
        diameter: f64,
    },
}

impl PackageKind {
    /// The discriminant name shown in the PACKAGE TYPE report column.
    pub const fn type_name(&self) -> &'static str {
        match self {
            PackageKind::Envelope { .. } => "Envelope",
            PackageKind::Box { .. } => "Box",
            PackageKind::Crate { .. } => "Crate",
            PackageKind::Drum { .. } => "Drum",
        }
    }

    /// Variant-specific fragment for the OTHER DETAILS report column.
    pub fn details(&self) -> String {
        match self {
            PackageKind::Envelope { height, width } => {
                format!("Height: {}, Width: {}", height, width)
            }
            PackageKind::Box {
                largest_dimension,
                volume,
            } => format!("Dimension: {}, Volume: {}", largest_dimension, volume),
            PackageKind::Crate {
                max_load_weight,
                content,
            } => format!("Load weight: {}, Content: {}", max_load_weight, content),
            PackageKind::Drum { material, diameter } => {
                format!("Material: {}, Diameter: {}", material, diameter)
            }
        }
    }
}

/// A package awaiting shipment.
///
/// ## Identity
/// `tracking_number` is the identity key: at most one package with a given
/// tracking number exists in the store at any time. A package leaves the
/// inventory either by explicit deletion or by being consumed by a
/// delivery transaction; both are terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Caller-chosen tracking number (1-5 characters).
    pub tracking_number: String,

    /// Handling specification.
    pub specification: Specification,

    /// Mailing class.
    pub mailing_class: MailingClass,

    /// Variant-specific payload.
    pub kind: PackageKind,
}

impl Package {
    pub fn new(
        tracking_number: impl Into<String>,
        specification: Specification,
        mailing_class: MailingClass,
        kind: PackageKind,
    ) -> Self {
        Package {
            tracking_number: tracking_number.into(),
            specification,
            mailing_class,
            kind,
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// Variant-specific payload of a registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "role")]
pub enum UserRole {
    Customer {
        phone_number: String,
        address: String,
    },
    Employee {
        /// Nine-digit social security number.
        ssn: u32,
        /// Monthly salary in dollars.
        monthly_salary: f64,
        bank_account_number: u64,
    },
}

impl UserRole {
    /// The discriminant name shown in the USER TYPE report column.
    pub const fn role_name(&self) -> &'static str {
        match self {
            UserRole::Customer { .. } => "Customer",
            UserRole::Employee { .. } => "Employee",
        }
    }

    /// Variant-specific fragment for the OTHER DETAILS report column.
    pub fn details(&self) -> String {
        match self {
            UserRole::Customer {
                phone_number,
                address,
            } => format!("Phone: {}, Address: {}", phone_number, address),
            UserRole::Employee {
                ssn,
                monthly_salary,
                bank_account_number,
            } => format!(
                "SSN: {}, Salary: {}, Account: {}",
                ssn, monthly_salary, bank_account_number
            ),
        }
    }
}

/// A registered user: either a customer or an employee.
///
/// ## Identity
/// `id` is assigned by the store's allocator and uniquely identifies
/// exactly one user for the store's lifetime. The role variant is fixed
/// at creation and never changes; update operations only touch the
/// fields within the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Allocator-assigned identifier.
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl User {
    pub fn is_customer(&self) -> bool {
        matches!(self.role, UserRole::Customer { .. })
    }

    pub fn is_employee(&self) -> bool {
        matches!(self.role, UserRole::Employee { .. })
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A completed shipping transaction.
///
/// Immutable once created: transactions are appended to the history by a
/// delivery operation and never mutated or deleted. The referenced ids
/// and tracking number were valid at creation time; the package itself
/// has left the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub customer_id: u32,
    pub employee_id: u32,
    /// Tracking number of the delivered package (no longer in inventory).
    pub tracking_number: String,
    pub shipping_date: DateTime<Utc>,
    pub delivery_date: DateTime<Utc>,
    /// Price charged, in dollars.
    pub price: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specification_parse_case_insensitive() {
        assert_eq!("Fragile".parse::<Specification>().unwrap(), Specification::Fragile);
        assert_eq!("fragile".parse::<Specification>().unwrap(), Specification::Fragile);
        assert_eq!("DO-NOT-BEND".parse::<Specification>().unwrap(), Specification::DoNotBend);
        assert_eq!("n/a".parse::<Specification>().unwrap(), Specification::NotApplicable);
        assert!("Flammable".parse::<Specification>().is_err());
    }

    #[test]
    fn test_mailing_class_parse() {
        assert_eq!("first-class".parse::<MailingClass>().unwrap(), MailingClass::FirstClass);
        assert_eq!("Metro".parse::<MailingClass>().unwrap(), MailingClass::Metro);
        assert!("Overnight".parse::<MailingClass>().is_err());
    }

    #[test]
    fn test_drum_material_parse() {
        assert_eq!("plastic".parse::<DrumMaterial>().unwrap(), DrumMaterial::Plastic);
        assert_eq!("Fiber".parse::<DrumMaterial>().unwrap(), DrumMaterial::Fiber);
        assert!("Steel".parse::<DrumMaterial>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for s in Specification::ALLOWED {
            let parsed: Specification = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
        for s in MailingClass::ALLOWED {
            let parsed: MailingClass = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
    }

    #[test]
    fn test_package_kind_type_names() {
        let envelope = PackageKind::Envelope { height: 10, width: 5 };
        assert_eq!(envelope.type_name(), "Envelope");

        let drum = PackageKind::Drum {
            material: DrumMaterial::Fiber,
            diameter: 12.5,
        };
        assert_eq!(drum.type_name(), "Drum");
        assert!(drum.details().contains("Fiber"));
    }

    #[test]
    fn test_user_role_predicates() {
        let customer = User {
            id: 1,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            role: UserRole::Customer {
                phone_number: "555-1111".to_string(),
                address: "1 Main St".to_string(),
            },
        };
        assert!(customer.is_customer());
        assert!(!customer.is_employee());
        assert_eq!(customer.role.role_name(), "Customer");
    }
}
