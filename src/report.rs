//! Read only aggregates over all clients of a bank

use crate::{account::Account, banking::Banking, errors::BalanceErr};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregates computed at a single moment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ReportSummary {
    pub clients: usize,
    pub accounts: usize,
    pub credit_sum: Decimal,
}

/// Queries over a borrowed [`Banking`]. Nothing is cached, every call reads current state
#[derive(Debug, Clone, Copy)]
pub struct ReportService<'b> {
    banking: &'b Banking,
}

impl<'b> ReportService<'b> {
    #[allow(missing_docs)]
    pub fn new(banking: &'b Banking) -> Self {
        Self { banking }
    }

    /// number of registered clients
    pub fn number_of_bank_clients(&self) -> usize {
        self.banking.clients().len()
    }

    /// number of accounts of all clients
    pub fn accounts_number(&self) -> usize {
        self.banking
            .clients()
            .iter()
            .map(|c| c.accounts().len())
            .sum()
    }

    /// net sum of all balances, overdrawn checking accounts decrease it.
    ///
    /// Fails when the sum does not fit into [`Decimal`]
    pub fn bank_credit_sum(&self) -> Result<Decimal, BalanceErr> {
        self.banking
            .clients()
            .iter()
            .flat_map(|c| c.accounts())
            .try_fold(Decimal::ZERO, |sum, a| {
                sum.checked_add(a.balance()).ok_or(BalanceErr::Overflow)
            })
    }

    #[allow(missing_docs)]
    pub fn summary(&self) -> Result<ReportSummary, BalanceErr> {
        Ok(ReportSummary {
            clients: self.number_of_bank_clients(),
            accounts: self.accounts_number(),
            credit_sum: self.bank_credit_sum()?,
        })
    }
}
