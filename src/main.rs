//! # Storefront Console
//!
//! An in-memory retail storefront driven from the terminal. A single seeded
//! account logs in, browses and filters the catalog, places orders and
//! reviews its purchase history. Nothing is persisted between runs.
//!
//! ```bash
//! cargo run
//!
//! # With store events on stderr
//! RUST_LOG=debug cargo run
//! ```

mod app_system;
mod console;
mod domain;
mod error;
mod store;

#[cfg(test)]
mod integration_tests;

use std::io;
use std::process::ExitCode;

use tracing::{error, info};

use crate::app_system::{setup_tracing, AppConfig};
use crate::console::{Console, SessionOutcome};
use crate::store::seed::seeded_store;

fn main() -> ExitCode {
    let config = AppConfig::default();
    setup_tracing(&config);

    info!("Starting storefront");
    let mut store = seeded_store(&config);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    match console::run(&mut store, &mut console, &config) {
        Ok(SessionOutcome::LoginRejected) => ExitCode::FAILURE,
        Ok(outcome) => {
            info!(?outcome, order_count = store.orders().len(), "Session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Session aborted");
            ExitCode::FAILURE
        }
    }
}
