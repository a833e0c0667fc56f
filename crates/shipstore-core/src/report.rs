//! # Report Formatting
//!
//! Fixed-width table rendering for packages, users, and transactions.
//!
//! ## Table Shape
//! ```text
//! --------------------------------------------------------------- ...
//! | PACKAGE TYPE |   TRACKING # | SPECIFICATION | MAILING CLASS | ...
//! --------------------------------------------------------------- ...
//! |     Envelope |        TRK01 |       Fragile |      Priority | ...
//! --------------------------------------------------------------- ...
//! ```
//!
//! Rows appear in the order the slice holds them, which for store
//! collections is insertion order. Each function takes a slice so a
//! single-entity rendering and a whole-collection rendering share one
//! path.

use std::fmt::Write;

use crate::types::{Package, Transaction, User};

// Total row widths, used for the horizontal rules.
const PACKAGE_TABLE_WIDTH: usize = 111;
const USER_TABLE_WIDTH: usize = 114;
const TRANSACTION_TABLE_WIDTH: usize = 99;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Package Table
// =============================================================================

/// Renders a fixed-column table of packages.
///
/// Header, one row per package in slice order, horizontal rules top,
/// below the header, and bottom.
pub fn packages_table(packages: &[Package]) -> String {
    let rule = "-".repeat(PACKAGE_TABLE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "| {:>12} | {:>12} | {:>13} | {:>13} | {:<45} |",
        "PACKAGE TYPE", "TRACKING #", "SPECIFICATION", "MAILING CLASS", "OTHER DETAILS"
    );
    let _ = writeln!(out, "{}", rule);

    for p in packages {
        let _ = writeln!(
            out,
            "| {:>12} | {:>12} | {:>13} | {:>13} | {:<45} |",
            p.kind.type_name(),
            p.tracking_number,
            p.specification,
            p.mailing_class,
            p.kind.details()
        );
    }

    let _ = writeln!(out, "{}", rule);
    out
}

// =============================================================================
// User Table
// =============================================================================

/// Renders a fixed-column table of users.
pub fn users_table(users: &[User]) -> String {
    let rule = "-".repeat(USER_TABLE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "| {:>10} | {:>9} | {:>12} | {:>12} | {:<55} |",
        "USER TYPE", "USER ID", "FIRST NAME", "LAST NAME", "OTHER DETAILS"
    );
    let _ = writeln!(out, "{}", rule);

    for u in users {
        let _ = writeln!(
            out,
            "| {:>10} | {:>9} | {:>12} | {:>12} | {:<55} |",
            u.role.role_name(),
            u.id,
            u.first_name,
            u.last_name,
            u.role.details()
        );
    }

    let _ = writeln!(out, "{}", rule);
    out
}

// =============================================================================
// Transaction Table
// =============================================================================

/// Renders a fixed-column table of the transaction history.
pub fn transactions_table(transactions: &[Transaction]) -> String {
    let rule = "-".repeat(TRANSACTION_TABLE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "| {:>11} | {:>11} | {:>10} | {:>19} | {:>19} | {:>10} |",
        "CUSTOMER ID", "EMPLOYEE ID", "TRACKING #", "SHIPPING DATE", "DELIVERY DATE", "PRICE"
    );
    let _ = writeln!(out, "{}", rule);

    for t in transactions {
        let _ = writeln!(
            out,
            "| {:>11} | {:>11} | {:>10} | {:>19} | {:>19} | {:>10.2} |",
            t.customer_id,
            t.employee_id,
            t.tracking_number,
            t.shipping_date.format(DATE_FORMAT).to_string(),
            t.delivery_date.format(DATE_FORMAT).to_string(),
            t.price
        );
    }

    let _ = writeln!(out, "{}", rule);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
