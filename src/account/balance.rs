use crate::errors::BalanceErr;
use rust_decimal::Decimal;

/// Represents current account balance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balance {
    current: Decimal,
}

impl Balance {
    /// Balance that starts at `current`, that can not be lower than `floor`
    pub fn opening(current: Decimal, floor: Decimal) -> Result<Self, BalanceErr> {
        if current < floor {
            return Err(BalanceErr::BelowLimit);
        }
        Ok(Self { current })
    }

    /// Nothing changes on error
    pub fn deposit(&mut self, amount: &Decimal) -> Result<(), BalanceErr> {
        self.current = self
            .current
            .checked_add(*amount)
            .ok_or(BalanceErr::Overflow)?;
        Ok(())
    }

    /// Nothing changes on error
    pub fn try_withdraw(&mut self, amount: &Decimal, floor: Decimal) -> Result<(), BalanceErr> {
        // result below `Decimal::MIN` is below any floor as well
        let rest = self
            .current
            .checked_sub(*amount)
            .ok_or(BalanceErr::InsufficientFunds)?;
        if rest < floor {
            return Err(BalanceErr::InsufficientFunds);
        }

        self.current = rest;
        Ok(())
    }

    pub fn current(&self) -> Decimal {
        self.current
    }
}
