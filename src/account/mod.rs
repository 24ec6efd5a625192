//! Account traits and structs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) mod balance;
pub(crate) mod bank_account;

pub use bank_account::{AccountKind, BankAccount};

/// Represent basic account information and balance
pub trait Account {
    /// variant of account
    fn account_type(&self) -> AccountType;
    /// current amount of money, negative when checking account is overdrawn
    fn balance(&self) -> Decimal;
    /// how far below zero balance can go
    fn overdraft(&self) -> Decimal;

    /// lowest balance allowed for this account
    fn lowest_balance(&self) -> Decimal {
        -self.overdraft()
    }

    /// amount of money available for withdraw
    fn available(&self) -> Decimal {
        self.balance().saturating_add(self.overdraft())
    }
}

/// Allowed account variants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum AccountType {
    Saving,
    Checking,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Saving => f.write_str("saving"),
            AccountType::Checking => f.write_str("checking"),
        }
    }
}
