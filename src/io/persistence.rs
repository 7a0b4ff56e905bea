//! JSON persistence gateway
//!
//! Loads and saves the whole account store as a single pretty-printed
//! JSON document, `{ "accounts": [Account...] }`. The caller (the CLI
//! shell) invokes `save` after every successful mutation; the core never
//! touches this module.
//!
//! Durability is deliberately last-write-wins: every save overwrites the
//! whole file, there is no incremental log and no fsync guarantee.

use crate::core::store::AccountStore;
use crate::types::PersistenceError;
use std::fs;
use std::path::Path;

/// Load the account store from the data file
///
/// A missing file is not an error: an empty store is created and written
/// out immediately, so the file exists from the first session on. A file
/// that exists but cannot be read or parsed is returned as an error; the
/// shell decides whether to start over with an empty store.
///
/// # Errors
///
/// - `PersistenceError::Io` if the file exists but cannot be read
/// - `PersistenceError::Malformed` if the contents are not a valid
///   ledger document
pub fn load(path: &Path) -> Result<AccountStore, PersistenceError> {
    if !path.exists() {
        let store = AccountStore::new();
        save(path, &store)?;
        return Ok(store);
    }

    let raw = fs::read_to_string(path)?;
    let store = serde_json::from_str(&raw)?;
    Ok(store)
}

/// Save the account store to the data file, overwriting it in full
///
/// # Errors
///
/// - `PersistenceError::Io` if the file cannot be written
/// - `PersistenceError::Malformed` if serialization fails
pub fn save(path: &Path, store: &AccountStore) -> Result<(), PersistenceError> {
    let document = serde_json::to_string_pretty(store)?;
    fs::write(path, document)?;
    tracing::debug!(path = %path.display(), accounts = store.len(), "ledger saved");
    Ok(())
}
