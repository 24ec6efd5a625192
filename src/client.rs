//! Bank client and its active account

use crate::{
    account::{Account, BankAccount},
    amount::Amount,
    errors::ClientErr,
    AccountID, ClientName, Registration,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of client, serialized as `MALE` or `FEMALE`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Mr."),
            Gender::Female => f.write_str("Ms."),
        }
    }
}

/// Client owns its accounts and operates on one of them, the active account.
///
/// Active account is never chosen implicitly. It has to be set with
/// [`Client::set_active_account`] or [`Client::set_default_active_account_if_not_set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    name: ClientName,
    gender: Gender,
    city: Option<String>,
    accounts: Vec<BankAccount>,
    active: Option<AccountID>,
    registration: Option<Registration>,
}

impl Client {
    /// Create client without accounts
    pub fn new(name: impl Into<ClientName>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            city: None,
            accounts: Vec::new(),
            active: None,
            registration: None,
        }
    }

    #[allow(missing_docs)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(missing_docs)]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[allow(missing_docs)]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    #[allow(missing_docs)]
    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = Some(city.into());
    }

    /// Take ownership of `account` and return its id. Active account is not changed
    pub fn add_account(&mut self, account: BankAccount) -> AccountID {
        self.push_account(account);
        self.accounts.len() - 1
    }

    pub(crate) fn push_account(&mut self, mut account: BankAccount) -> &mut BankAccount {
        let id = self.accounts.len();
        account.assign_owner(self.name.clone(), self.registration, id);
        self.accounts.push(account);
        &mut self.accounts[id]
    }

    /// `None` until client is added to a bank
    pub fn registration(&self) -> Option<Registration> {
        self.registration
    }

    /// Retag all accounts, copies taken before registration are no longer accepted
    pub(crate) fn register(&mut self, registration: Registration) {
        self.registration = Some(registration);
        for (id, account) in self.accounts.iter_mut().enumerate() {
            account.assign_owner(self.name.clone(), self.registration, id);
        }
    }

    /// All accounts in order they were added
    pub fn accounts(&self) -> &[BankAccount] {
        &self.accounts
    }

    #[allow(missing_docs)]
    pub fn account(&self, id: AccountID) -> Option<&BankAccount> {
        self.accounts.get(id)
    }

    #[allow(missing_docs)]
    pub fn account_mut(&mut self, id: AccountID) -> Option<&mut BankAccount> {
        self.accounts.get_mut(id)
    }

    /// Overwrite owned account with state of its detached copy.
    ///
    /// Copy has to come from this client (same name and registration) and keep the account
    /// kind, overdraft included.
    pub fn replace_account(&mut self, account: BankAccount) -> Result<(), ClientErr> {
        if account.owner() != Some(self.name.as_str())
            || account.owner_registration() != self.registration
        {
            return Err(ClientErr::AccountNotOwned);
        }
        let owned = account
            .id()
            .and_then(|id| self.accounts.get_mut(id))
            .ok_or(ClientErr::AccountNotOwned)?;
        if owned.kind() != account.kind() {
            return Err(ClientErr::AccountNotOwned);
        }

        *owned = account;
        Ok(())
    }

    #[allow(missing_docs)]
    pub fn set_active_account(&mut self, id: AccountID) -> Result<(), ClientErr> {
        if id >= self.accounts.len() {
            return Err(ClientErr::AccountNotOwned);
        }
        self.active = Some(id);
        Ok(())
    }

    /// Make first account active if no account is active
    pub fn set_default_active_account_if_not_set(&mut self) -> Result<(), ClientErr> {
        if self.active.is_some() {
            return Ok(());
        }
        if self.accounts.is_empty() {
            return Err(ClientErr::NoAccountsAvailable);
        }
        self.active = Some(0);
        Ok(())
    }

    #[allow(missing_docs)]
    pub fn active_account_id(&self) -> Option<AccountID> {
        self.active
    }

    #[allow(missing_docs)]
    pub fn active_account(&self) -> Result<&BankAccount, ClientErr> {
        self.active
            .and_then(|id| self.accounts.get(id))
            .ok_or(ClientErr::ActiveAccountNotSet)
    }

    fn active_account_mut(&mut self) -> Result<&mut BankAccount, ClientErr> {
        self.active
            .and_then(|id| self.accounts.get_mut(id))
            .ok_or(ClientErr::ActiveAccountNotSet)
    }

    /// deposit into active account
    pub fn deposit(&mut self, amount: Amount) -> Result<(), ClientErr> {
        self.active_account_mut()?.deposit(amount)?;
        Ok(())
    }

    /// withdraw from active account
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), ClientErr> {
        self.active_account_mut()?.withdraw(amount)?;
        Ok(())
    }

    /// balance of active account
    pub fn balance(&self) -> Result<Decimal, ClientErr> {
        Ok(self.active_account()?.balance())
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Client: {} {}", self.gender, self.name)?;
        if let Some(city) = &self.city {
            write!(f, " ({city})")?;
        }
        for (id, account) in self.accounts.iter().enumerate() {
            let marker = if self.active == Some(id) { "*" } else { " " };
            write!(f, "\n {marker} {account}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Client, Gender};
    use crate::account::{Account, AccountType, BankAccount};
    use crate::amount::Amount;
    use crate::errors::{BalanceErr, ClientErr};
    use rust_decimal::Decimal;

    fn amount(n: u64) -> Amount {
        Amount::new(n, 0).unwrap()
    }

    fn jonny() -> Client {
        let mut c = Client::new("Jonny Bravo", Gender::Male);
        c.set_city("Seattle");
        c.add_account(BankAccount::saving(Decimal::ZERO).unwrap());
        c.add_account(BankAccount::checking(Decimal::new(1000, 0), Decimal::new(200, 0)).unwrap());
        c
    }

    #[test]
    fn deposit_requires_active_account() {
        let mut c = jonny();

        let e = c.deposit(amount(5000)).unwrap_err();
        assert_eq!(e, ClientErr::ActiveAccountNotSet);
        assert_eq!(c.balance().unwrap_err(), ClientErr::ActiveAccountNotSet);
        assert_eq!(
            c.withdraw(amount(1)).unwrap_err(),
            ClientErr::ActiveAccountNotSet
        );

        c.set_default_active_account_if_not_set().unwrap();
        c.deposit(amount(5000)).unwrap();

        assert_eq!(c.active_account_id(), Some(0));
        assert_eq!(c.balance().unwrap(), Decimal::new(5000, 0));
        assert_eq!(c.accounts()[1].balance(), Decimal::new(1000, 0));
    }

    #[test]
    fn default_active_account_keeps_explicit_choice() {
        let mut c = jonny();
        c.set_active_account(1).unwrap();
        c.set_default_active_account_if_not_set().unwrap();

        assert_eq!(c.active_account_id(), Some(1));
        assert_eq!(c.balance().unwrap(), Decimal::new(1000, 0));
    }

    #[test]
    fn default_active_account_without_accounts() {
        let mut c = Client::new("Anna Smith", Gender::Female);
        let e = c.set_default_active_account_if_not_set().unwrap_err();
        assert_eq!(e, ClientErr::NoAccountsAvailable);
        assert_eq!(c.active_account_id(), None);
    }

    #[test]
    fn adding_first_account_does_not_activate_it() {
        let mut c = Client::new("Anna Smith", Gender::Female);
        let id = c.add_account(BankAccount::empty(AccountType::Saving));

        assert_eq!(id, 0);
        assert_eq!(c.active_account_id(), None);
        assert_eq!(c.accounts()[0].owner(), Some("Anna Smith"));
    }

    #[test]
    fn active_account_must_be_owned() {
        let mut c = jonny();
        assert_eq!(c.set_active_account(2).unwrap_err(), ClientErr::AccountNotOwned);
        assert_eq!(c.active_account_id(), None);
    }

    #[test]
    fn withdraw_propagates_insufficient_funds() {
        let mut c = jonny();
        c.set_active_account(1).unwrap();

        c.withdraw(amount(1200)).unwrap();
        let e = c.withdraw(amount(1)).unwrap_err();

        assert_eq!(e, BalanceErr::InsufficientFunds.into());
        assert_eq!(c.balance().unwrap(), Decimal::new(-200, 0));
    }

    #[test]
    fn replace_account_from_detached_copy() {
        let mut c = jonny();
        let mut detached = c.accounts()[0].clone();
        detached.deposit(amount(300)).unwrap();
        assert_eq!(c.accounts()[0].balance(), Decimal::ZERO);

        c.replace_account(detached).unwrap();
        assert_eq!(c.accounts()[0].balance(), Decimal::new(300, 0));
    }

    #[test]
    fn replace_account_rejects_foreign_accounts() {
        let mut c = jonny();
        let mut adam = Client::new("Adam Budzinski", Gender::Male);
        adam.add_account(BankAccount::saving(Decimal::ZERO).unwrap());

        let foreign = adam.accounts()[0].clone();
        assert_eq!(
            c.replace_account(foreign).unwrap_err(),
            ClientErr::AccountNotOwned
        );

        let detached = BankAccount::saving(Decimal::new(10, 0)).unwrap();
        assert_eq!(
            c.replace_account(detached).unwrap_err(),
            ClientErr::AccountNotOwned
        );
        assert_eq!(c.accounts()[0].balance(), Decimal::ZERO);
    }

    #[test]
    fn copies_taken_before_registration_are_rejected() {
        let mut c = jonny();
        let mut before = c.accounts()[0].clone();
        before.deposit(amount(10)).unwrap();

        c.register(3);
        assert_eq!(c.registration(), Some(3));
        assert_eq!(
            c.replace_account(before).unwrap_err(),
            ClientErr::AccountNotOwned
        );
        assert_eq!(c.accounts()[0].balance(), Decimal::ZERO);

        let mut after = c.accounts()[0].clone();
        after.deposit(amount(10)).unwrap();
        c.replace_account(after).unwrap();
        assert_eq!(c.accounts()[0].balance(), Decimal::new(10, 0));
    }

    #[test]
    fn display_marks_active_account() {
        let mut c = jonny();
        c.set_default_active_account_if_not_set().unwrap();

        let expected = "Client: Mr. Jonny Bravo (Seattle)\n \
                        * saving account, balance 0\n   \
                        checking account, balance 1000, overdraft 200";
        assert_eq!(c.to_string(), expected);
    }
}
