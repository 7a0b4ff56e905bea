//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account entity and identifier
//! - `journal`: Journal entry types (the per-account ledger journal)
//! - `error`: Error types for the ledger core and the persistence gateway

pub mod account;
pub mod error;
pub mod journal;

pub use account::{Account, AccountId};
pub use error::{LedgerError, PersistenceError};
pub use journal::{EntryKind, JournalEntry};
