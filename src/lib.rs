//! Bank Ledger Library
//! # Overview
//!
//! This library provides a single-user bank ledger: accounts held in
//! memory, validated balance-changing operations, an append-only journal
//! per account, and whole-file JSON persistence driven by the caller.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, JournalEntry, errors)
//! - [`cli`] - Argument parsing and the interactive menu shell
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - The eight ledger operations
//!   - [`core::store`] - The ordered in-memory account collection
//!   - [`core::id_gen`] - Account id generation with rejection sampling
//! - [`io`] - JSON persistence of the whole store
//!
//! # Operations
//!
//! The ledger supports eight operations:
//!
//! - **Create**: Open an account with a non-negative initial deposit
//! - **View / List**: Pure reads over one account or all of them
//! - **Deposit / Withdraw**: Single-account balance changes, journal-recorded
//! - **Transfer**: An atomic two-account move posting a matched
//!   `TRANSFER_OUT`/`TRANSFER_IN` entry pair
//! - **History**: The full ordered journal of one account
//! - **Delete**: Remove an account and its journal entirely
//!
//! # Execution model
//!
//! Single-threaded and synchronous: every operation runs to completion
//! before another begins, and mutating operations take `&mut Ledger`.
//! Embeddings with concurrent callers must add their own mutual exclusion
//! around every mutating call.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{generate_account_id, AccountStore, Ledger};
pub use types::{Account, AccountId, EntryKind, JournalEntry, LedgerError, PersistenceError};
