//! # Menu Loop
//!
//! The interactive menu: prints the operation list, reads a choice, and
//! dispatches to the store. All input validation here is about getting a
//! well-formed value out of the user; domain invariants stay in the
//! store.
//!
//! Bad input never aborts the program: enumerated and numeric prompts
//! re-prompt until they parse, and store errors are printed before the
//! menu comes back around. End-of-input behaves like choosing exit, so
//! the snapshot still gets saved.

use std::fmt;
use std::io::{BufRead, StdinLock};
use std::str::FromStr;

use chrono::Utc;

use shipstore_core::{DrumMaterial, MailingClass, Package, PackageKind, Specification};
use shipstore_db::StoreState;

type Lines<'a> = std::io::Lines<StdinLock<'a>>;

/// Runs the menu loop until the user exits or input ends.
pub fn run(state: &StoreState) {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        let Some(choice) = read_trimmed(&mut lines) else {
            break;
        };

        let outcome = match choice.as_str() {
            "1" => show_packages(state),
            "2" => add_package(&mut lines, state),
            "3" => delete_package(&mut lines, state),
            "4" => search_package(&mut lines, state),
            "5" => show_users(state),
            "6" => add_user(&mut lines, state),
            "7" => update_user(&mut lines, state),
            "8" => deliver_package(&mut lines, state),
            "9" => show_transactions(state),
            "10" => break,
            _ => {
                eprintln!("Please select a number between 1 and 10.");
                Some(())
            }
        };

        // None means stdin was exhausted mid-operation.
        if outcome.is_none() {
            break;
        }
    }
}

fn print_menu() {
    println!(
        "\n 1. Show all existing packages in the database.\n \
         2. Add a new package to the database.\n \
         3. Delete a package from the database (given its tracking number).\n \
         4. Search for a package (given its tracking number).\n \
         5. Show list of users.\n \
         6. Add a new user to the database.\n \
         7. Update user info (given their id).\n \
         8. Deliver a package.\n \
         9. Show a list of transactions.\n\
         10. Exit program.\n"
    );
}

// =============================================================================
// Input Helpers
// =============================================================================

/// Reads one trimmed line; `None` when input is exhausted.
fn read_trimmed(lines: &mut Lines) -> Option<String> {
    lines.next()?.ok().map(|l| l.trim().to_string())
}

fn prompt(lines: &mut Lines, label: &str) -> Option<String> {
    println!("\n{}", label);
    read_trimmed(lines)
}

/// Prompts until the input parses, re-prompting with the parse error.
fn prompt_parse<T>(lines: &mut Lines, label: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    loop {
        let raw = prompt(lines, label)?;
        match raw.parse() {
            Ok(value) => return Some(value),
            Err(err) => eprintln!("Bad input. {}. Please try again.", err),
        }
    }
}

// =============================================================================
// Package Operations
// =============================================================================

fn show_packages(state: &StoreState) -> Option<()> {
    println!("{}", state.with_store(|s| s.packages_formatted()));
    Some(())
}

fn add_package(lines: &mut Lines, state: &StoreState) -> Option<()> {
    let package_type: u32 = prompt_parse(
        lines,
        "Select package type:\n1. Envelope\n2. Box\n3. Crate\n4. Drum",
    )?;
    if !(1..=4).contains(&package_type) {
        eprintln!("Legal package type values: 1-4.");
        return Some(());
    }

    let tracking_number = prompt(lines, "Enter tracking number (1-5 characters):")?;
    let specification: Specification = prompt_parse(
        lines,
        "Enter specification: Fragile, Books, Catalogs, Do-not-bend, or N/A",
    )?;
    let mailing_class: MailingClass = prompt_parse(
        lines,
        "Enter mailing class: First-Class, Priority, Retail, Ground, or Metro",
    )?;

    let kind = match package_type {
        1 => PackageKind::Envelope {
            height: prompt_parse(lines, "Enter height (inches):")?,
            width: prompt_parse(lines, "Enter width (inches):")?,
        },
        2 => PackageKind::Box {
            largest_dimension: prompt_parse(lines, "Enter largest dimension (inches):")?,
            volume: prompt_parse(lines, "Enter volume (cubic inches):")?,
        },
        3 => PackageKind::Crate {
            max_load_weight: prompt_parse(lines, "Enter maximum load weight (lb):")?,
            content: prompt(lines, "Enter content description:")?,
        },
        _ => PackageKind::Drum {
            material: prompt_parse::<DrumMaterial>(lines, "Enter material (Plastic / Fiber):")?,
            diameter: prompt_parse(lines, "Enter diameter (inches):")?,
        },
    };

    let package = Package::new(tracking_number, specification, mailing_class, kind);
    match state.with_store_mut(|s| s.add_package(package)) {
        Ok(()) => println!("Package added."),
        Err(err) => eprintln!("{}", err),
    }
    Some(())
}

fn delete_package(lines: &mut Lines, state: &StoreState) -> Option<()> {
    let tracking_number = prompt(lines, "Enter tracking number of package to delete:")?;

    if state.with_store_mut(|s| s.delete_package(&tracking_number)) {
        println!("Package deleted.");
    } else {
        println!("Package with given tracking number not found in the database.");
    }
    Some(())
}

fn search_package(lines: &mut Lines, state: &StoreState) -> Option<()> {
    let tracking_number = prompt(lines, "Enter tracking number of package to search for:")?;

    match state.with_store(|s| s.package_formatted(&tracking_number)) {
        Some(table) => println!("{}", table),
        None => println!(
            "Package with tracking number {} not found in the database.",
            tracking_number
        ),
    }
    Some(())
}

// =============================================================================
// User Operations
// =============================================================================

fn show_users(state: &StoreState) -> Option<()> {
    println!("{}", state.with_store(|s| s.users_formatted()));
    Some(())
}

fn add_user(lines: &mut Lines, state: &StoreState) -> Option<()> {
    let user_type: u32 = prompt_parse(lines, "Select user type:\n1. Customer\n2. Employee")?;
    if !(1..=2).contains(&user_type) {
        eprintln!("Wrong integer value: choose 1 or 2.");
        return Some(());
    }

    let first_name = prompt(lines, "Enter first name:")?;
    let last_name = prompt(lines, "Enter last name:")?;

    let result = if user_type == 1 {
        let phone_number = prompt(lines, "Enter phone number:")?;
        let address = prompt(lines, "Enter address:")?;
        state.with_store_mut(|s| s.add_customer(&first_name, &last_name, &phone_number, &address))
    } else {
        let ssn: u32 = prompt_parse(lines, "Enter SSN (nine digits):")?;
        let monthly_salary: f64 = prompt_parse(lines, "Enter monthly salary:")?;
        let bank_account_number: u64 = prompt_parse(lines, "Enter bank account number:")?;
        state.with_store_mut(|s| {
            s.add_employee(&first_name, &last_name, ssn, monthly_salary, bank_account_number)
        })
    };

    match result {
        Ok(id) => println!("User added with id {}.", id),
        Err(err) => eprintln!("{}", err),
    }
    Some(())
}

fn update_user(lines: &mut Lines, state: &StoreState) -> Option<()> {
    let id: u32 = prompt_parse(lines, "Enter user ID:")?;

    if !state.with_store(|s| s.user_exists(id)) {
        println!("User not found.");
        return Some(());
    }

    let first_name = prompt(lines, "Enter first name:")?;
    let last_name = prompt(lines, "Enter last name:")?;

    let result = if state.with_store(|s| s.is_customer(id)) {
        let phone_number = prompt(lines, "Enter phone number:")?;
        let address = prompt(lines, "Enter address:")?;
        state.with_store_mut(|s| {
            s.update_customer(id, &first_name, &last_name, &phone_number, &address)
        })
    } else {
        let ssn: u32 = prompt_parse(lines, "Enter SSN (nine digits):")?;
        let monthly_salary: f64 = prompt_parse(lines, "Enter monthly salary:")?;
        let bank_account_number: u64 = prompt_parse(lines, "Enter bank account number:")?;
        state.with_store_mut(|s| {
            s.update_employee(id, &first_name, &last_name, ssn, monthly_salary, bank_account_number)
        })
    };

    match result {
        Ok(()) => println!("User updated."),
        Err(err) => eprintln!("{}", err),
    }
    Some(())
}

// =============================================================================
// Delivery & Transactions
// =============================================================================

fn deliver_package(lines: &mut Lines, state: &StoreState) -> Option<()> {
    let customer_id: u32 = prompt_parse(lines, "Enter customer ID:")?;
    let employee_id: u32 = prompt_parse(lines, "Enter employee ID:")?;
    let tracking_number = prompt(lines, "Enter tracking number:")?;
    let price: f64 = prompt_parse(lines, "Enter price:")?;

    let now = Utc::now();
    let result = state.with_store_mut(|s| {
        s.deliver_package(customer_id, employee_id, &tracking_number, now, now, price)
    });

    match result {
        Ok(()) => println!("Transaction completed!"),
        Err(err) => eprintln!("{}", err),
    }
    Some(())
}

fn show_transactions(state: &StoreState) -> Option<()> {
    println!("{}", state.with_store(|s| s.transactions_formatted()));
    Some(())
}
