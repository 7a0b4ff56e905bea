//! Interactive menu shell
//!
//! The caller side of the ledger contract: collects raw input, invokes a
//! ledger operation, persists the store after each successful mutation,
//! and renders results or the core's error strings verbatim. No business
//! validation happens here.

use crate::core::Ledger;
use crate::io::persistence;
use crate::types::Account;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Interactive shell over one ledger and one data file
pub struct Shell {
    ledger: Ledger,
    data_file: PathBuf,
}

impl Shell {
    pub fn new(ledger: Ledger, data_file: PathBuf) -> Self {
        Shell { ledger, data_file }
    }

    /// Run the menu loop until the user exits or stdin closes
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            render_header();
            render_menu();

            match self.step() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    // stdin closed; save like a normal exit
                    self.persist();
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// One menu round-trip; returns `false` when the user chose exit
    fn step(&mut self) -> io::Result<bool> {
        let choice = prompt("Select option (1-9): ")?;
        match choice.as_str() {
            "1" => self.create_account()?,
            "2" => self.view_account()?,
            "3" => self.list_accounts(),
            "4" => self.deposit()?,
            "5" => self.withdraw()?,
            "6" => self.transfer()?,
            "7" => self.history()?,
            "8" => self.delete_account()?,
            "9" => {
                println!("Saving and exiting...");
                self.persist();
                return Ok(false);
            }
            _ => println!("Invalid option. Please select 1-9."),
        }
        Ok(true)
    }

    fn create_account(&mut self) -> io::Result<()> {
        println!("Create New Account");
        let name = prompt("Account holder name: ")?;
        let amount = prompt("Initial deposit amount: ")?;

        match self.ledger.create_account(&name, &amount) {
            Ok(account) => {
                let id = account.id.clone();
                self.persist();
                println!("Account created successfully. ID: {}", id);
            }
            Err(e) => println!("Error: {}", e),
        }
        Ok(())
    }

    fn view_account(&mut self) -> io::Result<()> {
        println!("View Account Details");
        let id = prompt("Account ID: ")?;

        match self.ledger.account(&id) {
            Ok(account) => render_account_box(account),
            Err(e) => println!("Error: {}", e),
        }
        Ok(())
    }

    fn list_accounts(&mut self) {
        println!("All Accounts");

        match self.ledger.accounts() {
            Ok(accounts) => {
                println!(
                    "{:<10} {:<20} {:>14} {:<8}",
                    "ID", "Holder Name", "Balance", "Status"
                );
                for account in accounts {
                    println!(
                        "{:<10} {:<20} {:>14} {:<8}",
                        account.id,
                        account.holder_name,
                        format_money(account.balance),
                        "ACTIVE"
                    );
                }

                let total: Decimal = accounts.iter().map(|account| account.balance).sum();
                println!("Total accounts: {}", accounts.len());
                println!("Total balance: {}", format_money(total));
            }
            Err(e) => println!("{}", e),
        }
    }

    fn deposit(&mut self) -> io::Result<()> {
        println!("Deposit Funds");
        let id = prompt("Account ID: ")?;
        let amount = prompt("Deposit amount: ")?;

        match self.ledger.deposit(&id, &amount) {
            Ok(account) => {
                let balance = account.balance;
                self.persist();
                println!("Deposit complete. New balance: {}", format_money(balance));
            }
            Err(e) => println!("Error: {}", e),
        }
        Ok(())
    }

    fn withdraw(&mut self) -> io::Result<()> {
        println!("Withdraw Funds");
        let id = prompt("Account ID: ")?;
        let amount = prompt("Withdrawal amount: ")?;

        match self.ledger.withdraw(&id, &amount) {
            Ok(account) => {
                let balance = account.balance;
                self.persist();
                println!(
                    "Withdrawal complete. New balance: {}",
                    format_money(balance)
                );
            }
            Err(e) => println!("Error: {}", e),
        }
        Ok(())
    }

    fn transfer(&mut self) -> io::Result<()> {
        println!("Transfer Between Accounts");
        let from = prompt("From Account ID: ")?;
        let to = prompt("To Account ID: ")?;
        let amount = prompt("Transfer amount: ")?;

        match self.ledger.transfer(&from, &to, &amount) {
            Ok(()) => {
                self.persist();
                println!("Transfer completed successfully.");
            }
            Err(e) => println!("Error: {}", e),
        }
        Ok(())
    }

    fn history(&mut self) -> io::Result<()> {
        println!("Transaction History");
        let id = prompt("Account ID: ")?;

        match self.ledger.history(&id) {
            Ok(entries) => {
                println!(
                    "{:<12} {:<14} {:>14} {:>14}",
                    "Date", "Type", "Amount", "Balance After"
                );
                for entry in entries {
                    let date = entry.timestamp.format("%Y-%m-%d").to_string();
                    println!(
                        "{:<12} {:<14} {:>14} {:>14}",
                        date,
                        entry.kind.to_string(),
                        format_money(entry.amount),
                        format_money(entry.balance_after)
                    );
                }
            }
            Err(e) => println!("Error: {}", e),
        }
        Ok(())
    }

    fn delete_account(&mut self) -> io::Result<()> {
        println!("Delete Account");
        let id = prompt("Account ID: ")?;

        match self.ledger.delete_account(&id) {
            Ok(()) => {
                self.persist();
                println!("Account deleted successfully.");
            }
            Err(e) => println!("Error: {}", e),
        }
        Ok(())
    }

    /// Write the store to disk; report but do not abort on failure
    fn persist(&self) {
        if let Err(e) = persistence::save(&self.data_file, self.ledger.store()) {
            tracing::error!(error = %e, "failed to save data file");
            println!("Failed to save data.");
        }
    }
}

/// Print a question and read one trimmed line from stdin
fn prompt(question: &str) -> io::Result<String> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::ErrorKind::UnexpectedEof.into());
    }
    Ok(line.trim().to_string())
}

fn render_header() {
    println!("======================================");
    println!("=            BANK LEDGER             =");
    println!("======================================");
}

fn render_menu() {
    println!("1. Create New Account");
    println!("2. View Account Details");
    println!("3. List All Accounts");
    println!("4. Deposit Funds");
    println!("5. Withdraw Funds");
    println!("6. Transfer Between Accounts");
    println!("7. View Transaction History");
    println!("8. Delete Account");
    println!("9. Exit Application");
}

fn render_account_box(account: &Account) {
    let lines = [
        format!("Account: {}", account.id),
        format!("Holder: {}", account.holder_name),
        format!("Balance: {}", format_money(account.balance)),
        format!("Opened: {}", account.created_at.format("%Y-%m-%d")),
    ];

    let width = lines.iter().map(|line| line.len()).max().unwrap_or(0) + 4;
    let border = format!("+{}+", "-".repeat(width - 2));

    println!("{}", border);
    for line in &lines {
        println!("| {:<inner$} |", line, inner = width - 4);
    }
    println!("{}", border);
}

/// Format a balance as USD with thousands separators, e.g. `$1,234.50`
fn format_money(value: Decimal) -> String {
    let text = format!("{:.2}", value.round_dp(2));
    let negative = text.starts_with('-');
    let unsigned = text.trim_start_matches('-');
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-${}.{}", grouped, frac_part)
    } else {
        format!("${}.{}", grouped, frac_part)
    }
}
