//! Initial clients and accounts of a bank, and wiring them into [`Banking`]

use crate::{
    account::{AccountType, BankAccount},
    banking::Banking,
    client::{Client, Gender},
    csv::{self, RawAccountDefinition},
    errors::ConfigErr,
    ClientName,
};
use anyhow::Context;
use rust_decimal::Decimal;
use std::{collections::HashMap, path::Path};
use tokio::io::{AsyncRead, BufReader};
use tracing::debug;

/// Definitions used when no configuration file is given
pub const DEFAULT_CLIENTS_CSV: &str = "\
client,gender,city,account,balance,overdraft
Jonny Bravo,MALE,Seattle,saving,0,
Jonny Bravo,MALE,Seattle,checking,1000,200
Adam Budzinski,MALE,Krakow,checking,2000,500
";

/// Opening state of an account
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct AccountConfig {
    pub account_type: AccountType,
    pub balance: Decimal,
    pub overdraft: Option<Decimal>,
}

/// Client with accounts in definition order
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ClientConfig {
    pub name: ClientName,
    pub gender: Gender,
    pub city: Option<String>,
    pub accounts: Vec<AccountConfig>,
}

/// Clients in order of their first definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct BankConfig {
    pub clients: Vec<ClientConfig>,
}

impl BankConfig {
    /// Group account definitions by client
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = RawAccountDefinition>,
    ) -> Result<Self, ConfigErr> {
        let mut clients: Vec<ClientConfig> = Vec::new();
        let mut by_name = HashMap::new();

        for def in definitions {
            if def.account_type == AccountType::Saving && def.overdraft.is_some() {
                return Err(ConfigErr::OverdraftOnSaving(def.client));
            }
            let account = AccountConfig {
                account_type: def.account_type,
                balance: def.balance,
                overdraft: def.overdraft,
            };

            match by_name.get(&def.client).copied() {
                Some(idx) => {
                    let client: &mut ClientConfig = &mut clients[idx];
                    if client.gender != def.gender {
                        return Err(ConfigErr::ConflictingClient(def.client));
                    }
                    if let Some(city) = def.city {
                        if client.city.as_ref().is_some_and(|known| *known != city) {
                            return Err(ConfigErr::ConflictingClient(def.client));
                        }
                        client.city.get_or_insert(city);
                    }
                    client.accounts.push(account);
                }
                None => {
                    by_name.insert(def.client.clone(), clients.len());
                    clients.push(ClientConfig {
                        name: def.client,
                        gender: def.gender,
                        city: def.city,
                        accounts: vec![account],
                    });
                }
            }
        }

        Ok(Self { clients })
    }

    /// Read definitions in csv format from `input`
    pub async fn from_csv_reader<'r, R: AsyncRead + Unpin + Send + 'r>(
        input: R,
    ) -> anyhow::Result<Self> {
        let definitions = csv::deserialize_definitions_from_csv_reader(input)
            .await
            .context("improper content of configuration")?;
        let config = Self::from_definitions(definitions)?;
        debug!(clients = config.clients.len(), "configuration loaded");
        Ok(config)
    }

    /// Read definitions from csv file
    pub async fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let f = tokio::fs::File::open(path.as_ref())
            .await
            .with_context(|| format!("access configuration file {}", path.as_ref().display()))?;

        Self::from_csv_reader(BufReader::new(f)).await
    }

    /// Parse [`DEFAULT_CLIENTS_CSV`]
    pub async fn embedded() -> anyhow::Result<Self> {
        Self::from_csv_reader(DEFAULT_CLIENTS_CSV.as_bytes()).await
    }

    /// Create every client with its accounts and register them in new [`Banking`]
    pub fn build(self) -> Result<Banking, ConfigErr> {
        let mut banking = Banking::new();
        for client_config in self.clients {
            let client = client_config.into_client()?;
            banking.add_client(client)?;
        }
        Ok(banking)
    }
}

impl ClientConfig {
    /// Client with all accounts opened, without active account
    pub fn into_client(self) -> Result<Client, ConfigErr> {
        let mut client = Client::new(self.name, self.gender);
        if let Some(city) = self.city {
            client.set_city(city);
        }

        for acc in self.accounts {
            let account = match acc.account_type {
                AccountType::Saving => BankAccount::saving(acc.balance),
                AccountType::Checking => {
                    BankAccount::checking(acc.balance, acc.overdraft.unwrap_or_default())
                }
            }
            .map_err(|source| ConfigErr::InvalidAccount {
                client: client.name().to_owned(),
                source,
            })?;
            client.add_account(account);
        }

        Ok(client)
    }
}

#[cfg(test)]
mod test {
    use super::{AccountConfig, BankConfig, ClientConfig};
    use crate::account::{Account, AccountType};
    use crate::client::Gender;
    use crate::errors::{AccountErr, BalanceErr, BankErr, ConfigErr};
    use rust_decimal::Decimal;

    const HEADER: &str = "client,gender,city,account,balance,overdraft\n";

    async fn parse(rows: &str) -> anyhow::Result<BankConfig> {
        let input = format!("{HEADER}{rows}");
        BankConfig::from_csv_reader(input.as_bytes()).await
    }

    #[tokio::test]
    async fn embedded_configuration() -> anyhow::Result<()> {
        let config = BankConfig::embedded().await?;

        assert_eq!(config.clients.len(), 2);
        assert_eq!(
            config.clients[1],
            ClientConfig {
                name: "Adam Budzinski".into(),
                gender: Gender::Male,
                city: Some("Krakow".into()),
                accounts: vec![AccountConfig {
                    account_type: AccountType::Checking,
                    balance: Decimal::new(2000, 0),
                    overdraft: Some(Decimal::new(500, 0)),
                }],
            }
        );

        let banking = config.build()?;
        let jonny = banking.client("Jonny Bravo")?;
        assert_eq!(jonny.city(), Some("Seattle"));
        assert_eq!(jonny.active_account_id(), None);
        assert_eq!(jonny.accounts().len(), 2);
        assert_eq!(jonny.accounts()[0].account_type(), AccountType::Saving);
        assert_eq!(jonny.accounts()[1].overdraft(), Decimal::new(200, 0));

        Ok(())
    }

    #[tokio::test]
    async fn rows_are_grouped_by_client() -> anyhow::Result<()> {
        let config = parse(
            "Anna Smith,FEMALE,,saving,1,\n\
             Jonny Bravo,MALE,Seattle,saving,2,\n\
             Anna Smith,FEMALE,Warsaw,checking,3,0\n",
        )
        .await?;

        let names: Vec<_> = config.clients.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Anna Smith", "Jonny Bravo"]);
        assert_eq!(config.clients[0].city.as_deref(), Some("Warsaw"));
        assert_eq!(config.clients[0].accounts.len(), 2);
        assert_eq!(config.clients[0].accounts[1].balance, Decimal::new(3, 0));

        Ok(())
    }

    #[tokio::test]
    async fn conflicting_client_rows() {
        let e = parse(
            "Anna Smith,FEMALE,Warsaw,saving,1,\n\
             Anna Smith,FEMALE,Gdansk,saving,1,\n",
        )
        .await
        .unwrap_err();
        assert_eq!(
            e.downcast_ref::<ConfigErr>(),
            Some(&ConfigErr::ConflictingClient("Anna Smith".into()))
        );

        let e = parse(
            "Anna Smith,FEMALE,Warsaw,saving,1,\n\
             Anna Smith,MALE,Warsaw,saving,1,\n",
        )
        .await
        .unwrap_err();
        assert_eq!(
            e.downcast_ref::<ConfigErr>(),
            Some(&ConfigErr::ConflictingClient("Anna Smith".into()))
        );
    }

    #[tokio::test]
    async fn overdraft_on_saving_account() {
        let e = parse("Jonny Bravo,MALE,Seattle,saving,0,100\n")
            .await
            .unwrap_err();
        assert_eq!(
            e.downcast_ref::<ConfigErr>(),
            Some(&ConfigErr::OverdraftOnSaving("Jonny Bravo".into()))
        );
    }

    #[tokio::test]
    async fn invalid_opening_balance() -> anyhow::Result<()> {
        let config = parse("Adam Budzinski,MALE,Krakow,checking,-600,500\n").await?;

        let e = config.build().unwrap_err();
        assert_eq!(
            e,
            ConfigErr::InvalidAccount {
                client: "Adam Budzinski".into(),
                source: AccountErr::AccMoney(BalanceErr::BelowLimit),
            }
        );

        Ok(())
    }

    #[test]
    fn duplicate_client_while_wiring() {
        let client = ClientConfig {
            name: "Jonny Bravo".into(),
            gender: Gender::Male,
            city: None,
            accounts: Vec::new(),
        };
        let config = BankConfig {
            clients: vec![client.clone(), client],
        };

        assert_eq!(
            config.build().unwrap_err(),
            ConfigErr::Bank(BankErr::DuplicateClient("Jonny Bravo".into()))
        );
    }
}
