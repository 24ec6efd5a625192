//! Banking service: registry of clients and operations on their accounts

use crate::{
    account::{AccountType, BankAccount},
    amount::Amount,
    client::Client,
    errors::BankErr,
    ClientName, Registration,
};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Clients registered in the bank, keyed by name and kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct Banking {
    clients: Vec<Client>,
    by_name: HashMap<ClientName, usize>,
    next_registration: Registration,
}

impl Banking {
    /// Empty bank
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `client`. Client with the same name can not be registered twice.
    ///
    /// Accounts of registered client are retagged, so copies of them taken earlier, or taken
    /// from another client with the same name, are not accepted by [`Banking::update_account`].
    pub fn add_client(&mut self, mut client: Client) -> Result<&mut Client, BankErr> {
        if self.by_name.contains_key(client.name()) {
            warn!(client = client.name(), "rejecting duplicate client");
            return Err(BankErr::DuplicateClient(client.name().to_owned()));
        }

        let idx = self.clients.len();
        client.register(self.next_registration);
        self.next_registration += 1;
        info!(client = client.name(), accounts = client.accounts().len(), "client added");
        self.by_name.insert(client.name().to_owned(), idx);
        self.clients.push(client);
        Ok(&mut self.clients[idx])
    }

    #[allow(missing_docs)]
    pub fn client(&self, name: &str) -> Result<&Client, BankErr> {
        let idx = self.index_of(name)?;
        Ok(&self.clients[idx])
    }

    #[allow(missing_docs)]
    pub fn client_mut(&mut self, name: &str) -> Result<&mut Client, BankErr> {
        let idx = self.index_of(name)?;
        Ok(&mut self.clients[idx])
    }

    /// All clients in order they were added
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Open new account with zero balance for registered client.
    ///
    /// Returned reference points to the account owned by client, changes made through it
    /// need no [`Banking::update_account`].
    pub fn create_account(
        &mut self,
        name: &str,
        account_type: AccountType,
    ) -> Result<&mut BankAccount, BankErr> {
        let account = self
            .client_mut(name)?
            .push_account(BankAccount::empty(account_type));
        debug!(client = name, id = ?account.id(), %account_type, "account created");
        Ok(account)
    }

    /// Write state of a detached copy back to the account owned by client
    pub fn update_account(&mut self, name: &str, account: BankAccount) -> Result<(), BankErr> {
        let id = account.id();
        self.client_mut(name)?.replace_account(account)?;
        debug!(client = name, ?id, "account updated");
        Ok(())
    }

    /// All accounts of client in order they were added
    pub fn all_accounts(&self, name: &str) -> Result<&[BankAccount], BankErr> {
        Ok(self.client(name)?.accounts())
    }

    /// Move `amount` from active account of `from` into active account of `to`.
    ///
    /// On error no account is changed.
    pub fn transfer_money(&mut self, from: &str, to: &str, amount: Amount) -> Result<(), BankErr> {
        let from_idx = self.index_of(from)?;
        let to_idx = self.index_of(to)?;

        // both parties have to be able to operate before any money moves
        self.clients[to_idx].active_account()?;
        self.clients[from_idx].withdraw(amount)?;

        if let Err(e) = self.clients[to_idx].deposit(amount) {
            warn!(from, to, %amount, "deposit failed, rolling back transfer");
            self.clients[from_idx].deposit(amount)?;
            return Err(e.into());
        }

        info!(from, to, %amount, "money transferred");
        Ok(())
    }

    fn index_of(&self, name: &str) -> Result<usize, BankErr> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| BankErr::ClientNotFound(name.to_owned()))
    }
}
