//! Account types for the bank ledger
//!
//! This module defines the Account structure: a named balance-holding
//! entity with a unique identifier and an append-only journal of entries.

use super::journal::{EntryKind, JournalEntry};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account identifier
///
/// A short string of the form `ACC-####` (four random digits), unique
/// within a store and immutable after creation.
pub type AccountId = String;

/// A single bank account and its journal
///
/// The balance is non-negative after every completed operation and always
/// equals the initial deposit plus the signed sum of all subsequent entry
/// amounts. The journal is seeded with the initial deposit at creation, so
/// it is never empty afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier, immutable after creation
    pub id: AccountId,

    /// Free-form holder name, no validation applied
    pub holder_name: String,

    /// Current balance
    pub balance: Decimal,

    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,

    /// Append-only journal; insertion order is chronological order
    pub transactions: Vec<JournalEntry>,
}

impl Account {
    /// Open a new account with the given initial deposit
    ///
    /// Seeds the journal with a single `DEPOSIT` entry carrying the
    /// initial amount, so the journal is never empty after creation.
    ///
    /// # Arguments
    ///
    /// * `id` - The generated account identifier
    /// * `holder_name` - The account holder's name
    /// * `initial` - The initial deposit (must already be validated as non-negative)
    /// * `opened_at` - Creation time, shared with the seed entry
    pub fn open(
        id: AccountId,
        holder_name: &str,
        initial: Decimal,
        opened_at: DateTime<Utc>,
    ) -> Self {
        Account {
            id,
            holder_name: holder_name.to_string(),
            balance: initial,
            created_at: opened_at,
            transactions: vec![JournalEntry {
                kind: EntryKind::Deposit,
                amount: initial,
                timestamp: opened_at,
                balance_after: initial,
                description: "Initial deposit".to_string(),
            }],
        }
    }

    /// Append a journal entry reflecting the current balance
    ///
    /// The caller adjusts `balance` first; this records an entry whose
    /// `balance_after` is the balance as it stands now.
    pub fn record(
        &mut self,
        kind: EntryKind,
        amount: Decimal,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) {
        self.transactions.push(JournalEntry {
            kind,
            amount,
            timestamp,
            balance_after: self.balance,
            description: description.into(),
        });
    }
}
