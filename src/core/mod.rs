//! Core business logic module
//!
//! This module contains the ledger core:
//! - `store` - The ordered in-memory account collection
//! - `id_gen` - Account id generation with rejection sampling
//! - `ledger` - The eight ledger operations over a store

pub mod id_gen;
pub mod ledger;
pub mod store;

pub use id_gen::generate_account_id;
pub use ledger::Ledger;
pub use store::AccountStore;
