//! # Shipstore CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Read configuration from environment
//! 2. Initialize tracing (logging)
//! 3. Load the snapshot (or start empty on first run)
//! 4. Run the menu loop
//! 5. Save the snapshot on exit
//!
//! A corrupt snapshot is reported and the program continues with an
//! empty store; the previous artifact stays on disk untouched until the
//! next successful save.

use std::process::ExitCode;

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use shipstore_db::{snapshot, ShippingStore, StoreState};

mod config;
mod menu;

use config::CliConfig;

fn main() -> ExitCode {
    let config = CliConfig::from_env();
    init_tracing(&config.log_filter);

    let store = match snapshot::load(&config.data_file) {
        Ok(store) => store,
        Err(err) => {
            warn!(
                path = %config.data_file.display(),
                %err,
                "Could not read snapshot, starting with an empty store"
            );
            ShippingStore::new()
        }
    };

    let state = StoreState::new(store);
    menu::run(&state);

    if let Err(err) = state.with_store(|s| snapshot::save(s, &config.data_file)) {
        error!(path = %config.data_file.display(), %err, "Failed to save snapshot");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initializes the tracing subscriber.
///
/// `SHIPSTORE_LOG` takes precedence (standard env-filter syntax); the
/// configured default applies otherwise.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_env("SHIPSTORE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
