//! csv input/output format and functions

use csv_async::{AsyncWriterBuilder, Terminator};
use rust_decimal::Decimal;

use crate::{
    account::{Account, AccountType},
    client::{Client, Gender},
    AccountID, ClientName,
};
use serde::{Deserialize, Serialize};

use tokio::io::{AsyncRead, AsyncWrite};
use tokio_stream::{Stream, StreamExt};

/// One account of one client, as defined in configuration input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct RawAccountDefinition {
    pub client: ClientName,
    pub gender: Gender,
    pub city: Option<String>,
    #[serde(rename = "account")]
    pub account_type: AccountType,
    pub balance: Decimal,
    pub overdraft: Option<Decimal>,
}

/// read all account definitions from `input`. Header line is required
pub async fn deserialize_definitions_from_csv_reader<'r, R: AsyncRead + Unpin + Send + 'r>(
    input: R,
) -> anyhow::Result<Vec<RawAccountDefinition>> {
    let mut builder = csv_async::AsyncReaderBuilder::new();
    builder.trim(csv_async::Trim::All);

    let mut rdr = builder.create_deserializer(input);

    let mut definitions = Vec::new();
    let mut records = rdr.deserialize::<RawAccountDefinition>();
    while let Some(record) = records.next().await {
        definitions.push(record?);
    }

    Ok(definitions)
}

/// summary of single account of a client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct AccountSummary {
    pub client: ClientName,
    pub account: AccountID,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub balance: Decimal,
    pub overdraft: Decimal,
    pub active: bool,
}

impl AccountSummary {
    /// one summary for each account of `client`
    pub fn of_client(client: &Client) -> impl Iterator<Item = AccountSummary> + '_ {
        client
            .accounts()
            .iter()
            .enumerate()
            .map(move |(id, acc)| AccountSummary {
                client: client.name().to_owned(),
                account: id,
                account_type: acc.account_type(),
                balance: acc.balance(),
                overdraft: acc.overdraft(),
                active: client.active_account_id() == Some(id),
            })
    }
}

/// read items from `in_stream` and save them as [`AccountSummary`] into `wr`. Headers will be
/// included automatically. Terminator is `\r\n`
pub async fn summarize_accounts(
    in_stream: impl Stream<Item = AccountSummary> + Unpin,
    wr: impl AsyncWrite + Unpin,
) -> anyhow::Result<()> {
    let mut in_stream = in_stream;

    let mut builder = AsyncWriterBuilder::new();
    builder.terminator(Terminator::CRLF);

    let mut wr = builder.create_serializer(wr);

    while let Some(acc_summary) = in_stream.next().await {
        wr.serialize(acc_summary).await?;
    }

    wr.flush().await?;
    Ok(())
}

/// write summary of every account of every client, in client order
pub async fn summarize_clients(clients: &[Client], wr: impl AsyncWrite + Unpin) -> anyhow::Result<()> {
    let summaries: Vec<_> = clients.iter().flat_map(AccountSummary::of_client).collect();
    summarize_accounts(tokio_stream::iter(summaries), wr).await
}
