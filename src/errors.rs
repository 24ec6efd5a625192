//! Possible errors

use crate::ClientName;
use thiserror::Error;

/// Group errors for account balance
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceErr {
    #[error("not enough funds available for this operation")]
    InsufficientFunds,
    #[error("balance is below the lowest value allowed for this account")]
    BelowLimit,
    #[error("balance exceeds the largest representable amount")]
    Overflow,
}

/// Group all errors that can occurs within account module
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountErr {
    #[error("account money change error")]
    AccMoney(#[from] BalanceErr),
    #[error("overdraft limit can not be negative")]
    NegativeOverdraft,
}

/// Errors of operations executed on behalf of a client
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientErr {
    #[error("active account is not set")]
    ActiveAccountNotSet,
    #[error("client has no accounts")]
    NoAccountsAvailable,
    #[error("account does not belong to this client")]
    AccountNotOwned,
    #[error("active account operation failed")]
    Account(#[from] AccountErr),
}

impl From<BalanceErr> for ClientErr {
    fn from(e: BalanceErr) -> Self {
        AccountErr::from(e).into()
    }
}

/// Errors returned by [`crate::banking::Banking`]
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BankErr {
    #[error("client `{0}` not found")]
    ClientNotFound(ClientName),
    #[error("client `{0}` already exists")]
    DuplicateClient(ClientName),
    #[error("client operation failed")]
    Client(#[from] ClientErr),
}

impl From<AccountErr> for BankErr {
    fn from(e: AccountErr) -> Self {
        ClientErr::from(e).into()
    }
}

impl From<BalanceErr> for BankErr {
    fn from(e: BalanceErr) -> Self {
        ClientErr::from(e).into()
    }
}

/// Errors of translating account definitions into a bank
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigErr {
    #[error("client `{0}` is defined with different gender or city")]
    ConflictingClient(ClientName),
    #[error("saving account of client `{0}` can not have an overdraft")]
    OverdraftOnSaving(ClientName),
    #[error("invalid opening state of account of client `{client}`")]
    InvalidAccount {
        client: ClientName,
        #[source]
        source: AccountErr,
    },
    #[error("bank wiring failed")]
    Bank(#[from] BankErr),
}
