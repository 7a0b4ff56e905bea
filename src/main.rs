//! Bank Ledger CLI
//!
//! Interactive command-line interface over the bank ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-file /path/to/bank-data.json
//! ```
//!
//! The program loads the JSON data file (creating it when missing), then
//! runs a nine-option menu loop. The store is written back in full after
//! every successful mutation and on exit.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (data file unreadable, terminal I/O failure, etc.)

use bank_ledger::cli;
use bank_ledger::core::{AccountStore, Ledger};
use bank_ledger::io::persistence;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so the interactive menu on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    // A data file that cannot be read or parsed is not fatal; warn and
    // start over empty, exactly like a corrupted file. Fatal exits are
    // reserved for the shell's own I/O failures below.
    let store = match persistence::load(&args.data_file) {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(error = %e, path = %args.data_file.display(), "data file unusable");
            println!("Warning: Data file corrupted. Starting with empty data.");
            AccountStore::new()
        }
    };

    let mut shell = cli::Shell::new(Ledger::from_store(store), args.data_file);
    if let Err(e) = shell.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
