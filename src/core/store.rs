//! Account store
//!
//! This module provides the `AccountStore`: the ordered in-memory
//! collection of all accounts and the core's sole shared mutable resource.
//! Every ledger operation receives exclusive access to one store, so
//! multiple independent stores (for tests, or separate data files) can
//! coexist; there is no process-wide singleton.
//!
//! The store also doubles as the persisted document: it serializes as
//! `{ "accounts": [Account...] }`, exactly the layout written to disk on
//! every successful mutation.

use crate::types::Account;
use serde::{Deserialize, Serialize};

/// Ordered collection of all accounts
///
/// Accounts keep their insertion order, which is also their creation
/// order. Lookups are linear scans by id; the store is sized for a
/// single user's accounts, not for bulk data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountStore {
    /// All accounts, in creation order
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        AccountStore {
            accounts: Vec::new(),
        }
    }

    /// Number of accounts currently held
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Whether any account carries the given id
    pub fn contains(&self, id: &str) -> bool {
        self.accounts.iter().any(|account| account.id == id)
    }

    /// Look up an account by id
    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Look up an account by id for mutation
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    /// Position of an account in creation order
    ///
    /// Used by transfer, which must address two accounts (possibly the
    /// same one) without holding two mutable borrows at once.
    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.accounts.iter().position(|account| account.id == id)
    }

    /// Access an account by position
    pub(crate) fn at(&self, index: usize) -> &Account {
        &self.accounts[index]
    }

    /// Access an account by position for mutation
    pub(crate) fn at_mut(&mut self, index: usize) -> &mut Account {
        &mut self.accounts[index]
    }

    /// Append a newly created account and return a reference to it
    pub fn push(&mut self, account: Account) -> &Account {
        let index = self.accounts.len();
        self.accounts.push(account);
        &self.accounts[index]
    }

    /// Remove an account (and its whole journal) by id
    ///
    /// Returns the removed account, or `None` if the id did not resolve.
    /// No tombstone remains; transfer descriptions in other accounts that
    /// mention the removed id stay behind as opaque text.
    pub fn remove(&mut self, id: &str) -> Option<Account> {
        let index = self.position(id)?;
        Some(self.accounts.remove(index))
    }

    /// All accounts in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
