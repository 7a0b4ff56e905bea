//! Ledger operations
//!
//! This module provides the `Ledger`, which owns an `AccountStore` and
//! exposes the eight core operations: create, view, list, deposit,
//! withdraw, transfer, history, and delete.
//!
//! The ledger enforces every business rule itself and never trusts the
//! caller to have pre-validated its input:
//! - Amounts arrive as raw text and are parsed here; text that is not a
//!   number is rejected in the same way the amount bounds are.
//! - Every error is returned as data with a fixed, caller-visible message;
//!   nothing panics.
//! - A rejected operation leaves the store completely untouched.
//!
//! Persistence and rendering are the caller's concern: the ledger never
//! reads or writes files and never prints.

use crate::core::id_gen;
use crate::core::store::AccountStore;
use crate::types::{Account, EntryKind, JournalEntry, LedgerError};
use chrono::Utc;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a raw amount string into a decimal
///
/// Rejects anything that is not plain decimal text; the result is always
/// a finite number.
fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

/// Parse a raw amount string, additionally requiring it to be strictly positive
fn parse_positive_amount(raw: &str) -> Option<Decimal> {
    parse_amount(raw).filter(|amount| *amount > Decimal::ZERO)
}

/// The ledger: an account store plus the operations that act on it
///
/// Mutating operations take `&mut self`, so exclusive access is enforced
/// by the borrow checker under the crate's single-threaded execution
/// model. An embedding that introduces concurrent callers must wrap the
/// whole `Ledger` in explicit mutual exclusion (one lock around every
/// mutating call, transfer included) to preserve the balance invariant.
#[derive(Debug, Default)]
pub struct Ledger {
    store: AccountStore,
}

impl Ledger {
    /// Create a ledger over an empty store
    pub fn new() -> Self {
        Ledger {
            store: AccountStore::new(),
        }
    }

    /// Create a ledger over an existing store (e.g. loaded from disk)
    pub fn from_store(store: AccountStore) -> Self {
        Ledger { store }
    }

    /// Borrow the underlying store, e.g. for persistence
    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// Consume the ledger and return its store
    pub fn into_store(self) -> AccountStore {
        self.store
    }

    /// Create a new account with an initial deposit
    ///
    /// Validation order: the amount must parse as a number, then it must
    /// be non-negative (zero is a valid opening balance). On success a
    /// fresh id is generated and the account is appended to the store with
    /// its seed `DEPOSIT` entry. Nothing is created on failure.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the amount is not numeric
    /// - `NegativeAmount` if the amount is below zero
    /// - `IdSpaceExhausted` if no free id remains
    pub fn create_account(&mut self, name: &str, amount: &str) -> Result<&Account, LedgerError> {
        let initial = parse_amount(amount).ok_or(LedgerError::InvalidInput)?;
        if initial < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount);
        }

        let id = id_gen::generate_account_id(&self.store)?;
        let account = Account::open(id, name, initial, Utc::now());
        Ok(self.store.push(account))
    }

    /// View one account's full details
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the id does not resolve
    pub fn account(&self, id: &str) -> Result<&Account, LedgerError> {
        self.store.get(id).ok_or(LedgerError::AccountNotFound)
    }

    /// List all accounts in creation order
    ///
    /// # Errors
    ///
    /// - `NoAccounts` if the store is empty
    pub fn accounts(&self) -> Result<&[Account], LedgerError> {
        if self.store.is_empty() {
            return Err(LedgerError::NoAccounts);
        }
        Ok(self.store.accounts())
    }

    /// Deposit funds into an account
    ///
    /// Validation order: the account must exist, then the amount must
    /// parse and be strictly positive (zero is rejected).
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the id does not resolve
    /// - `InvalidAmount` if the amount is not numeric or not positive
    /// - `ArithmeticOverflow` if the new balance would overflow
    pub fn deposit(&mut self, id: &str, amount: &str) -> Result<&Account, LedgerError> {
        let account = self.store.get_mut(id).ok_or(LedgerError::AccountNotFound)?;
        let amount = parse_positive_amount(amount).ok_or(LedgerError::InvalidAmount)?;
        let new_balance = account
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        account.balance = new_balance;
        account.record(EntryKind::Deposit, amount, Utc::now(), "Deposit");
        Ok(account)
    }

    /// Withdraw funds from an account
    ///
    /// Validation order: the account must exist, the amount must parse and
    /// be strictly positive, and the amount must not exceed the balance,
    /// so the balance never goes negative.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the id does not resolve
    /// - `InvalidAmount` if the amount is not numeric or not positive
    /// - `InsufficientFunds` if the amount exceeds the balance
    pub fn withdraw(&mut self, id: &str, amount: &str) -> Result<&Account, LedgerError> {
        let account = self.store.get_mut(id).ok_or(LedgerError::AccountNotFound)?;
        let amount = parse_positive_amount(amount).ok_or(LedgerError::InvalidAmount)?;
        if amount > account.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        // The guard above makes underflow unreachable; checked anyway so a
        // broken balance can never slip past as a wrapped value.
        let new_balance = account
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        account.balance = new_balance;
        account.record(EntryKind::Withdrawal, amount, Utc::now(), "Withdrawal");
        Ok(account)
    }

    /// Transfer funds between two accounts
    ///
    /// Validation order is fixed and caller-visible: source exists, then
    /// destination exists, then the amount parses and is strictly
    /// positive, then the source balance covers it.
    ///
    /// The effect is atomic over the two accounts: both balances move, and
    /// a `TRANSFER_OUT` entry on the source plus a `TRANSFER_IN` entry on
    /// the destination are recorded with one shared timestamp - or nothing
    /// happens at all.
    ///
    /// A self-transfer (source id equals destination id) is allowed: both
    /// balance moves apply and cancel out, and both entries are recorded
    /// against the one account with `balance_after` equal to its unchanged
    /// balance.
    ///
    /// # Errors
    ///
    /// - `SourceAccountNotFound` if the source id does not resolve
    /// - `RecipientAccountNotFound` if the destination id does not resolve
    /// - `InvalidTransferAmount` if the amount is not numeric or not positive
    /// - `InsufficientFunds` if the source balance does not cover the amount
    /// - `ArithmeticOverflow` if the destination balance would overflow
    pub fn transfer(&mut self, from: &str, to: &str, amount: &str) -> Result<(), LedgerError> {
        let src = self
            .store
            .position(from)
            .ok_or(LedgerError::SourceAccountNotFound)?;
        let dst = self
            .store
            .position(to)
            .ok_or(LedgerError::RecipientAccountNotFound)?;
        let amount = parse_positive_amount(amount).ok_or(LedgerError::InvalidTransferAmount)?;
        if self.store.at(src).balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }

        // Both new balances are computed before either account mutates, so
        // an overflow on the credit rejects the whole transfer. For a
        // self-transfer the credit applies on top of the debited balance,
        // netting to zero.
        let debited = self
            .store
            .at(src)
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let dst_balance = if src == dst {
            debited
        } else {
            self.store.at(dst).balance
        };
        let credited = dst_balance
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        self.store.at_mut(src).balance = debited;
        self.store.at_mut(dst).balance = credited;

        let timestamp = Utc::now();
        self.store
            .at_mut(src)
            .record(EntryKind::TransferOut, amount, timestamp, format!("To {}", to));
        self.store
            .at_mut(dst)
            .record(EntryKind::TransferIn, amount, timestamp, format!("From {}", from));

        Ok(())
    }

    /// View an account's full journal in recording order
    ///
    /// The empty-journal check is real even though creation always seeds
    /// one entry; a store deserialized from an external file may not honor
    /// that invariant.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the id does not resolve
    /// - `NoTransactions` if the journal holds no entries
    pub fn history(&self, id: &str) -> Result<&[JournalEntry], LedgerError> {
        let account = self.store.get(id).ok_or(LedgerError::AccountNotFound)?;
        if account.transactions.is_empty() {
            return Err(LedgerError::NoTransactions);
        }
        Ok(&account.transactions)
    }

    /// Delete an account and discard its journal entirely
    ///
    /// No tombstone remains and no referential checks run against other
    /// accounts' transfer descriptions.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the id does not resolve
    pub fn delete_account(&mut self, id: &str) -> Result<(), LedgerError> {
        self.store
            .remove(id)
            .map(|_| ())
            .ok_or(LedgerError::AccountNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ledger_with_account(name: &str, initial: &str) -> (Ledger, String) {
        let mut ledger = Ledger::new();
        let id = ledger.create_account(name, initial).unwrap().id.clone();
        (ledger, id)
    }

    // Create

    #[test]
    fn test_create_account_succeeds() {
        let mut ledger = Ledger::new();

        let account = ledger.create_account("Makoto", "1000").unwrap();
        assert_eq!(account.holder_name, "Makoto");
        assert_eq!(account.balance, Decimal::from(1000));
        assert_eq!(account.transactions.len(), 1);
        assert_eq!(account.transactions[0].description, "Initial deposit");

        assert_eq!(ledger.store().len(), 1);
    }

    #[test]
    fn test_create_account_with_zero_deposit() {
        let mut ledger = Ledger::new();
        let account = ledger.create_account("Empty", "0").unwrap();
        assert_eq!(account.balance, Decimal::ZERO);
        assert_eq!(account.transactions.len(), 1);
    }

    #[rstest]
    #[case::negative("-500", LedgerError::NegativeAmount)]
    #[case::non_numeric("abc", LedgerError::InvalidInput)]
    #[case::empty("", LedgerError::InvalidInput)]
    fn test_create_account_rejects_bad_amount(#[case] amount: &str, #[case] expected: LedgerError) {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.create_account("BadUser", amount), Err(expected));
        // No partial creation.
        assert!(ledger.store().is_empty());
    }

    #[test]
    fn test_duplicate_names_get_unique_ids() {
        let mut ledger = Ledger::new();
        let first = ledger.create_account("Makoto", "1000").unwrap().id.clone();
        let second = ledger.create_account("Makoto", "500").unwrap().id.clone();

        assert_eq!(ledger.store().len(), 2);
        assert_ne!(first, second);
    }

    // View / list

    #[test]
    fn test_account_returns_details() {
        let (ledger, id) = ledger_with_account("Makoto", "1000");

        let account = ledger.account(&id).unwrap();
        assert_eq!(account.holder_name, "Makoto");
    }

    #[test]
    fn test_account_not_found() {
        let ledger = Ledger::new();
        assert_eq!(ledger.account("ACC-MISSING"), Err(LedgerError::AccountNotFound));
    }

    #[test]
    fn test_accounts_empty_store() {
        let ledger = Ledger::new();
        assert_eq!(ledger.accounts(), Err(LedgerError::NoAccounts));
    }

    #[test]
    fn test_accounts_lists_all_in_creation_order() {
        let mut ledger = Ledger::new();
        let first = ledger.create_account("A", "10").unwrap().id.clone();
        let second = ledger.create_account("B", "20").unwrap().id.clone();

        let accounts = ledger.accounts().unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].id, first);
        assert_eq!(accounts[1].id, second);
    }

    // Deposit

    #[test]
    fn test_deposit_increases_balance_and_records_entry() {
        let (mut ledger, id) = ledger_with_account("Makoto", "1000");

        let account = ledger.deposit(&id, "250").unwrap();
        assert_eq!(account.balance, Decimal::from(1250));

        let entry = account.transactions.last().unwrap();
        assert_eq!(entry.kind, EntryKind::Deposit);
        assert_eq!(entry.amount, Decimal::from(250));
        assert_eq!(entry.balance_after, Decimal::from(1250));
        assert_eq!(entry.description, "Deposit");
    }

    #[test]
    fn test_deposit_missing_account() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.deposit("ACC-MISSING", "500"),
            Err(LedgerError::AccountNotFound)
        );
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-50")]
    #[case::non_numeric("abc")]
    fn test_deposit_rejects_bad_amount(#[case] amount: &str) {
        let (mut ledger, id) = ledger_with_account("Makoto", "1000");

        assert_eq!(ledger.deposit(&id, amount), Err(LedgerError::InvalidAmount));
        assert_eq!(ledger.account(&id).unwrap().balance, Decimal::from(1000));
        assert_eq!(ledger.account(&id).unwrap().transactions.len(), 1);
    }

    #[test]
    fn test_deposit_overflow_is_rejected_without_mutation() {
        // Decimal::MAX as text; any further credit must overflow.
        let (mut ledger, id) = ledger_with_account("Whale", "79228162514264337593543950335");

        assert_eq!(
            ledger.deposit(&id, "1"),
            Err(LedgerError::ArithmeticOverflow)
        );

        let account = ledger.account(&id).unwrap();
        assert_eq!(account.balance, Decimal::MAX);
        assert_eq!(account.transactions.len(), 1);
    }

    // Withdraw

    #[test]
    fn test_withdraw_decreases_balance_and_records_entry() {
        let (mut ledger, id) = ledger_with_account("Makoto", "1000");

        let account = ledger.withdraw(&id, "400").unwrap();
        assert_eq!(account.balance, Decimal::from(600));

        let entry = account.transactions.last().unwrap();
        assert_eq!(entry.kind, EntryKind::Withdrawal);
        assert_eq!(entry.amount, Decimal::from(400));
        assert_eq!(entry.balance_after, Decimal::from(600));
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let (mut ledger, id) = ledger_with_account("Makoto", "1000");

        let account = ledger.withdraw(&id, "1000").unwrap();
        assert_eq!(account.balance, Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_insufficient_funds_is_repeatable_without_mutation() {
        let (mut ledger, id) = ledger_with_account("Makoto", "100");

        // Two identical failing calls; neither may change anything.
        for _ in 0..2 {
            assert_eq!(
                ledger.withdraw(&id, "500"),
                Err(LedgerError::InsufficientFunds)
            );
            let account = ledger.account(&id).unwrap();
            assert_eq!(account.balance, Decimal::from(100));
            assert_eq!(account.transactions.len(), 1);
        }
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-1")]
    #[case::non_numeric("1o0")]
    fn test_withdraw_rejects_bad_amount(#[case] amount: &str) {
        let (mut ledger, id) = ledger_with_account("Makoto", "1000");
        assert_eq!(ledger.withdraw(&id, amount), Err(LedgerError::InvalidAmount));
    }

    #[test]
    fn test_withdraw_missing_account() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.withdraw("ACC-MISSING", "10"),
            Err(LedgerError::AccountNotFound)
        );
    }

    // Transfer

    #[test]
    fn test_transfer_moves_funds_and_posts_matched_pair() {
        let mut ledger = Ledger::new();
        let alice = ledger.create_account("Alice", "1000").unwrap().id.clone();
        let bob = ledger.create_account("Bob", "0").unwrap().id.clone();

        ledger.transfer(&alice, &bob, "200").unwrap();

        let alice_account = ledger.account(&alice).unwrap();
        let bob_account = ledger.account(&bob).unwrap();
        assert_eq!(alice_account.balance, Decimal::from(800));
        assert_eq!(bob_account.balance, Decimal::from(200));

        let out = alice_account.transactions.last().unwrap();
        let incoming = bob_account.transactions.last().unwrap();
        assert_eq!(out.kind, EntryKind::TransferOut);
        assert_eq!(incoming.kind, EntryKind::TransferIn);
        assert_eq!(out.amount, Decimal::from(200));
        assert_eq!(incoming.amount, Decimal::from(200));
        assert_eq!(out.timestamp, incoming.timestamp);
        assert_eq!(out.balance_after, Decimal::from(800));
        assert_eq!(incoming.balance_after, Decimal::from(200));
        assert_eq!(out.description, format!("To {}", bob));
        assert_eq!(incoming.description, format!("From {}", alice));
    }

    #[test]
    fn test_transfer_missing_source() {
        let mut ledger = Ledger::new();
        let bob = ledger.create_account("Bob", "0").unwrap().id.clone();

        assert_eq!(
            ledger.transfer("ACC-MISSING", &bob, "200"),
            Err(LedgerError::SourceAccountNotFound)
        );
    }

    #[test]
    fn test_transfer_missing_recipient_leaves_source_untouched() {
        let mut ledger = Ledger::new();
        let alice = ledger.create_account("Alice", "1000").unwrap().id.clone();

        assert_eq!(
            ledger.transfer(&alice, "ACC-MISSING", "200"),
            Err(LedgerError::RecipientAccountNotFound)
        );

        let account = ledger.account(&alice).unwrap();
        assert_eq!(account.balance, Decimal::from(1000));
        assert_eq!(account.transactions.len(), 1);
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-200")]
    #[case::non_numeric("lots")]
    fn test_transfer_rejects_bad_amount(#[case] amount: &str) {
        let mut ledger = Ledger::new();
        let alice = ledger.create_account("Alice", "1000").unwrap().id.clone();
        let bob = ledger.create_account("Bob", "0").unwrap().id.clone();

        assert_eq!(
            ledger.transfer(&alice, &bob, amount),
            Err(LedgerError::InvalidTransferAmount)
        );
        assert_eq!(ledger.account(&alice).unwrap().balance, Decimal::from(1000));
        assert_eq!(ledger.account(&bob).unwrap().balance, Decimal::ZERO);
    }

    #[test]
    fn test_transfer_insufficient_funds_posts_nothing() {
        let mut ledger = Ledger::new();
        let alice = ledger.create_account("Alice", "100").unwrap().id.clone();
        let bob = ledger.create_account("Bob", "0").unwrap().id.clone();

        assert_eq!(
            ledger.transfer(&alice, &bob, "500"),
            Err(LedgerError::InsufficientFunds)
        );

        assert_eq!(ledger.account(&alice).unwrap().transactions.len(), 1);
        assert_eq!(ledger.account(&bob).unwrap().transactions.len(), 1);
        assert_eq!(ledger.account(&alice).unwrap().balance, Decimal::from(100));
        assert_eq!(ledger.account(&bob).unwrap().balance, Decimal::ZERO);
    }

    #[test]
    fn test_transfer_overflow_leaves_both_accounts_untouched() {
        let mut ledger = Ledger::new();
        let alice = ledger.create_account("Alice", "100").unwrap().id.clone();
        let bob = ledger
            .create_account("Bob", "79228162514264337593543950335")
            .unwrap()
            .id
            .clone();

        // The credit would overflow; the debit must not have applied either.
        assert_eq!(
            ledger.transfer(&alice, &bob, "1"),
            Err(LedgerError::ArithmeticOverflow)
        );

        assert_eq!(ledger.account(&alice).unwrap().balance, Decimal::from(100));
        assert_eq!(ledger.account(&bob).unwrap().balance, Decimal::MAX);
        assert_eq!(ledger.account(&alice).unwrap().transactions.len(), 1);
        assert_eq!(ledger.account(&bob).unwrap().transactions.len(), 1);
    }

    #[test]
    fn test_self_transfer_keeps_balance_and_records_both_entries() {
        let (mut ledger, id) = ledger_with_account("Makoto", "1000");

        ledger.transfer(&id, &id, "300").unwrap();

        let account = ledger.account(&id).unwrap();
        assert_eq!(account.balance, Decimal::from(1000));
        assert_eq!(account.transactions.len(), 3);

        let out = &account.transactions[1];
        let incoming = &account.transactions[2];
        assert_eq!(out.kind, EntryKind::TransferOut);
        assert_eq!(incoming.kind, EntryKind::TransferIn);
        // Balances moved before entries were posted; both report the
        // unchanged final balance.
        assert_eq!(out.balance_after, Decimal::from(1000));
        assert_eq!(incoming.balance_after, Decimal::from(1000));
    }

    // History

    #[test]
    fn test_history_returns_entries_in_order() {
        let (mut ledger, id) = ledger_with_account("Makoto", "1000");
        ledger.deposit(&id, "100").unwrap();
        ledger.withdraw(&id, "50").unwrap();

        let entries = ledger.history(&id).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].kind, EntryKind::Deposit);
        assert_eq!(entries[1].kind, EntryKind::Deposit);
        assert_eq!(entries[2].kind, EntryKind::Withdrawal);
    }

    #[test]
    fn test_history_missing_account() {
        let ledger = Ledger::new();
        assert_eq!(
            ledger.history("ACC-MISSING"),
            Err(LedgerError::AccountNotFound)
        );
    }

    #[test]
    fn test_history_empty_journal() {
        // Creation always seeds an entry, so build the degenerate account
        // directly, as a deserialized external file could.
        let mut account = Account::open(
            "ACC-1234".to_string(),
            "Hollow",
            Decimal::ZERO,
            Utc::now(),
        );
        account.transactions.clear();

        let mut store = AccountStore::new();
        store.push(account);
        let ledger = Ledger::from_store(store);

        assert_eq!(ledger.history("ACC-1234"), Err(LedgerError::NoTransactions));
    }

    // Delete

    #[test]
    fn test_delete_account_removes_it() {
        let (mut ledger, id) = ledger_with_account("Makoto", "1000");

        ledger.delete_account(&id).unwrap();
        assert_eq!(ledger.account(&id), Err(LedgerError::AccountNotFound));
        assert!(ledger.store().is_empty());
    }

    #[test]
    fn test_delete_missing_account() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.delete_account("ACC-MISSING"),
            Err(LedgerError::AccountNotFound)
        );
    }

    // Invariants

    #[test]
    fn test_balance_equals_signed_sum_of_journal() {
        let mut ledger = Ledger::new();
        let alice = ledger.create_account("Alice", "1000").unwrap().id.clone();
        let bob = ledger.create_account("Bob", "250").unwrap().id.clone();

        ledger.deposit(&alice, "125.50").unwrap();
        ledger.withdraw(&alice, "75.25").unwrap();
        ledger.transfer(&alice, &bob, "300").unwrap();
        ledger.transfer(&bob, &alice, "50").unwrap();

        for account in ledger.accounts().unwrap() {
            let mut running = Decimal::ZERO;
            for entry in &account.transactions {
                match entry.kind {
                    EntryKind::Deposit | EntryKind::TransferIn => running += entry.amount,
                    EntryKind::Withdrawal | EntryKind::TransferOut => running -= entry.amount,
                }
                assert_eq!(entry.balance_after, running);
            }
            assert_eq!(account.balance, running);
            assert!(account.balance >= Decimal::ZERO);
        }
    }
}
