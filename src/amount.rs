//! Protect before using zero or negative amount for deposits, withdraws and transfers.

use std::{borrow::Borrow, fmt, ops::Deref};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represent strictly positive financial amount of money
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Create new amount `num * 10^-scale`. Fails for `num == 0` or `scale` above 28
    pub fn new(num: u64, scale: u32) -> Result<Amount, AmountErr> {
        Decimal::try_from_i128_with_scale(num.into(), scale)
            .map_err(|_| AmountErr::Scale(scale))?
            .try_into()
    }
}

/// represent error when operation want to move amount of money that can not exist
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmountErr {
    #[error("amount must be greater than zero")]
    NonPositive,
    #[error("scale {0} exceeds decimal precision")]
    Scale(u32),
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(AmountErr::NonPositive)
        }
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
