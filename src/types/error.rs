//! Error types for the bank ledger
//!
//! This module defines all error types that can occur while operating on
//! the ledger or persisting it to disk.
//!
//! # Error Categories
//!
//! - **Not-found errors**: an account id did not resolve; terminal for the call.
//! - **Validation errors**: bad amount text, non-positive amount, negative
//!   initial deposit; terminal, the caller must re-supply input.
//! - **Business-rule errors**: insufficient funds; terminal, but may succeed
//!   later once the balance changes.
//! - **Arithmetic errors**: a balance move that would overflow is rejected
//!   to keep account state intact.
//! - **Persistence errors**: file I/O or malformed data file; raised only by
//!   the persistence gateway, never by the core.
//!
//! Ledger errors are returned as data, never panicked. Their `Display`
//! strings are part of the observable contract with any existing caller and
//! are rendered verbatim by the CLI shell.

use thiserror::Error;

/// Main error type for ledger operations
///
/// Every unexpected input reduces to one of these variants; the core has no
/// fatal error class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Initial deposit did not parse as a number
    #[error("Invalid input")]
    InvalidInput,

    /// Initial deposit was negative
    #[error("Negative amount not accepted")]
    NegativeAmount,

    /// Deposit or withdrawal amount did not parse or was not strictly positive
    #[error("Invalid amount")]
    InvalidAmount,

    /// Transfer amount did not parse or was not strictly positive
    #[error("Input valid transfer amount")]
    InvalidTransferAmount,

    /// Account id did not resolve
    #[error("Account not found")]
    AccountNotFound,

    /// Transfer source account id did not resolve
    #[error("Source account not found")]
    SourceAccountNotFound,

    /// Transfer destination account id did not resolve
    #[error("Recipient account not found")]
    RecipientAccountNotFound,

    /// Requested amount exceeds the current balance
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// The store holds no accounts
    #[error("No accounts found")]
    NoAccounts,

    /// The account's journal holds no entries
    #[error("No transactions found")]
    NoTransactions,

    /// Balance arithmetic would overflow
    ///
    /// Raised instead of mutating either account; a rejected operation
    /// leaves the store untouched.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    /// The four-digit id space is fully occupied
    ///
    /// Raised instead of looping forever once the store holds all 9000
    /// possible `ACC-####` identifiers.
    #[error("Account id space exhausted")]
    IdSpaceExhausted,
}

/// Error type for the persistence gateway
///
/// Covers everything that can go wrong loading or saving the data file.
/// The shell decides how to react: a data file that cannot be loaded, for
/// either reason, is recoverable (warn and start with an empty store), and
/// a failed save is reported while the session continues.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file exists but does not hold a valid ledger document
    #[error("Malformed data file: {0}")]
    Malformed(#[from] serde_json::Error),
}
