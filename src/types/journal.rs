//! Journal entry types for the bank ledger
//!
//! An account's history is a ledger journal: an append-only sequence of
//! immutable records of balance-changing events. A journal entry is never
//! a database-transaction construct; there is no rollback beyond the
//! atomicity of the single operation that produced it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kinds of balance movement recorded in an account's journal
///
/// Deposits and transfer-ins add to the balance; withdrawals and
/// transfer-outs subtract from it. A transfer always posts a matched
/// `TransferOut`/`TransferIn` pair across the two accounts involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    /// Funds credited to the account (includes the seed entry at creation)
    Deposit,

    /// Funds debited from the account
    Withdrawal,

    /// Funds sent to another account (the source side of a transfer)
    TransferOut,

    /// Funds received from another account (the destination side of a transfer)
    TransferIn,
}

impl core::fmt::Display for EntryKind {
    /// Render the wire-format name (`DEPOSIT`, `TRANSFER_OUT`, ...)
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            EntryKind::Deposit => "DEPOSIT",
            EntryKind::Withdrawal => "WITHDRAWAL",
            EntryKind::TransferOut => "TRANSFER_OUT",
            EntryKind::TransferIn => "TRANSFER_IN",
        };
        f.write_str(label)
    }
}

/// One immutable record of a balance-changing event
///
/// Entries are appended in the order the events happened; insertion order
/// is chronological order. The serialized field names mirror the on-disk
/// document layout (`type`, `balanceAfter`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// The kind of movement this entry records
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Positive magnitude of the movement (never the resulting balance)
    pub amount: Decimal,

    /// Time the entry was recorded
    ///
    /// The two entries of a transfer share a single timestamp.
    pub timestamp: DateTime<Utc>,

    /// Account balance immediately after this entry
    ///
    /// Equals the running sum of all prior entries' signed effects plus
    /// this one.
    pub balance_after: Decimal,

    /// Free-text context, e.g. the counterparty id for transfers
    pub description: String,
}
