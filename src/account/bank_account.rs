use super::balance::Balance;
use super::{Account, AccountType};
use crate::{amount::Amount, errors::AccountErr, AccountID, ClientName, Registration};
use rust_decimal::Decimal;
use std::fmt;

/// Rules specific to account variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    /// balance can never go below zero
    Saving,
    /// balance can go down to `-overdraft`
    Checking {
        /// maximum negative balance, never negative itself
        overdraft: Decimal,
    },
}

impl AccountKind {
    /// variant without its parameters
    pub fn account_type(&self) -> AccountType {
        match self {
            AccountKind::Saving => AccountType::Saving,
            AccountKind::Checking { .. } => AccountType::Checking,
        }
    }

    /// allowed overdraft, zero for saving account
    pub fn overdraft(&self) -> Decimal {
        match self {
            AccountKind::Saving => Decimal::ZERO,
            AccountKind::Checking { overdraft } => *overdraft,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Owner {
    name: ClientName,
    registration: Option<Registration>,
    id: AccountID,
}

/// Saving or checking account held by exactly one client.
///
/// A clone keeps the owner tag of the original, so changes made to a detached copy can be
/// written back with [`crate::banking::Banking::update_account`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    owner: Option<Owner>,
    kind: AccountKind,
    balance: Balance,
}

impl BankAccount {
    /// New saving account. `balance` can not be negative
    pub fn saving(balance: Decimal) -> Result<Self, AccountErr> {
        Self::open(AccountKind::Saving, balance)
    }

    /// New checking account. `balance` can not be lower than `-overdraft`
    pub fn checking(balance: Decimal, overdraft: Decimal) -> Result<Self, AccountErr> {
        if overdraft < Decimal::ZERO {
            return Err(AccountErr::NegativeOverdraft);
        }
        Self::open(AccountKind::Checking { overdraft }, balance)
    }

    /// New account of type `account_type` with zero balance and zero overdraft
    pub fn empty(account_type: AccountType) -> Self {
        let kind = match account_type {
            AccountType::Saving => AccountKind::Saving,
            AccountType::Checking => AccountKind::Checking {
                overdraft: Decimal::ZERO,
            },
        };
        Self {
            owner: None,
            kind,
            balance: Balance::default(),
        }
    }

    fn open(kind: AccountKind, balance: Decimal) -> Result<Self, AccountErr> {
        let balance = Balance::opening(balance, -kind.overdraft())?;
        Ok(Self {
            owner: None,
            kind,
            balance,
        })
    }

    /// increase balance, unless it would exceed the largest representable amount
    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountErr> {
        self.balance.deposit(&amount)?;
        Ok(())
    }

    /// decrease balance if it stays above [`Account::lowest_balance`]
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountErr> {
        let floor = self.lowest_balance();
        self.balance.try_withdraw(&amount, floor)?;
        Ok(())
    }

    /// account variant rules
    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// position in owner account list, `None` for account not added to any client
    pub fn id(&self) -> Option<AccountID> {
        self.owner.as_ref().map(|o| o.id)
    }

    /// name of client holding this account
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_ref().map(|o| o.name.as_str())
    }

    /// registration of the owner in [`crate::banking::Banking`] at the time account was tagged
    pub fn owner_registration(&self) -> Option<Registration> {
        self.owner.as_ref().and_then(|o| o.registration)
    }

    pub(crate) fn assign_owner(
        &mut self,
        name: ClientName,
        registration: Option<Registration>,
        id: AccountID,
    ) {
        self.owner = Some(Owner {
            name,
            registration,
            id,
        });
    }
}

impl Account for BankAccount {
    fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }

    fn balance(&self) -> Decimal {
        self.balance.current()
    }

    fn overdraft(&self) -> Decimal {
        self.kind.overdraft()
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AccountKind::Saving => write!(f, "saving account, balance {}", self.balance()),
            AccountKind::Checking { overdraft } => write!(
                f,
                "checking account, balance {}, overdraft {}",
                self.balance(),
                overdraft
            ),
        }
    }
}
