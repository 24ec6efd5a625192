//! # Bank-app
//! Application builds a bank from client definitions, runs a few operations on existing and
//! new clients and prints every account to output.
//!
//! ## Input format
//! Optional path to csv with columns `client`, `gender`, `city`, `account`, `balance`,
//! `overdraft`. Built in definitions are used when no path is given.
//!
//! ```csv
//! client,gender,city,account,balance,overdraft
//! Jonny Bravo,MALE,Seattle,saving,0,
//! Adam Budzinski,MALE,Krakow,checking,2000,500
//! ```
//!
//! ## Output format
//! csv with columns `client`, `account`, `type`, `balance`, `overdraft`, `active`.
//! Logs are written to stderr, level is controlled by `RUST_LOG`.

#![deny(missing_docs)]

use anyhow::Context;
use bank_app::{
    account::AccountType,
    amount::Amount,
    banking::Banking,
    client::{Client, Gender},
    config::BankConfig,
    csv,
    errors::ClientErr,
    report::ReportService,
};
use std::env;
use tokio::io::stdout;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CLIENT_NAMES: [&str; 3] = ["Jonny Bravo", "Adam Budzinski", "Anna Smith"];

fn work_with_existing_clients(banking: &mut Banking) -> anyhow::Result<()> {
    let jonny = banking.client_mut(CLIENT_NAMES[0])?;
    let deposit = Amount::new(5_000, 0)?;
    match jonny.deposit(deposit) {
        Err(ClientErr::ActiveAccountNotSet) => {
            warn!(client = jonny.name(), "{}", ClientErr::ActiveAccountNotSet);
            jonny.set_default_active_account_if_not_set()?;
            jonny.deposit(deposit)?;
        }
        other => other?,
    }
    info!("{jonny}");

    let adam = banking.client_mut(CLIENT_NAMES[1])?;
    adam.set_default_active_account_if_not_set()?;
    adam.withdraw(Amount::new(1_500, 0)?)?;
    let balance = adam.balance()?;
    info!(client = adam.name(), %balance, "current balance");

    banking
        .transfer_money(CLIENT_NAMES[0], CLIENT_NAMES[1], Amount::new(1_000, 0)?)
        .context("transfer between existing clients")?;

    for client in banking.clients() {
        info!("{client}");
    }
    Ok(())
}

fn banking_service_demo(banking: &mut Banking) -> anyhow::Result<()> {
    banking.add_client(Client::new(CLIENT_NAMES[2], Gender::Female))?;

    let mut saving = banking
        .create_account(CLIENT_NAMES[2], AccountType::Saving)?
        .clone();
    saving.deposit(Amount::new(1_000, 0)?)?;
    banking.update_account(CLIENT_NAMES[2], saving)?;

    let mut checking = banking
        .create_account(CLIENT_NAMES[2], AccountType::Checking)?
        .clone();
    checking.deposit(Amount::new(3_000, 0)?)?;
    banking.update_account(CLIENT_NAMES[2], checking)?;

    for account in banking.all_accounts(CLIENT_NAMES[2])? {
        info!(client = CLIENT_NAMES[2], "{account}");
    }
    Ok(())
}

fn bank_reports_demo(banking: &Banking) -> anyhow::Result<()> {
    let report = ReportService::new(banking);
    let credit_sum = report.bank_credit_sum()?;
    info!(
        clients = report.number_of_bank_clients(),
        accounts = report.accounts_number(),
        %credit_sum,
        "bank report"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bank_app=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // CLI handle
    let args: Vec<String> = env::args().collect();
    let config = match args.as_slice() {
        [_] => BankConfig::embedded().await?,
        [_, path] => BankConfig::from_path(path).await?,
        _ => {
            return Err(anyhow::Error::msg(
                "expected at most one path to csv file with clients",
            ))
        }
    };

    let mut banking = config.build().context("failed to create bank")?;

    work_with_existing_clients(&mut banking).context("work with existing clients")?;
    banking_service_demo(&mut banking).context("banking service demo")?;
    bank_reports_demo(&banking).context("bank report")?;

    csv::summarize_clients(banking.clients(), stdout())
        .await
        .context("failed to save output")?;

    Ok(())
}
