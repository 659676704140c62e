use std::fmt;

use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{
    error::{Error, Result},
    ledger::Ledger,
    transaction::TransactionKind,
};

/// Branch code printed on account cards; the simulation has a single branch.
pub const AGENCY: &str = "0001";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum AccountVariant {
    Checking { limit: Decimal, daily_cap: u32 },
    Savings { daily_cap: u32 },
}

impl AccountVariant {
    /// Checking with the default caps: R$ 500 per withdrawal, 3 withdrawals
    /// per day.
    pub fn checking() -> Self {
        Self::Checking {
            limit: Decimal::from(500),
            daily_cap: 3,
        }
    }

    /// Savings with the default cap of 2 withdrawals per day and no
    /// per-withdrawal limit.
    pub fn savings() -> Self {
        Self::Savings { daily_cap: 2 }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountVariant::Checking { .. } => "Checking",
            AccountVariant::Savings { .. } => "Savings",
        }
    }
}

impl fmt::Display for AccountVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Account {
    number: u32,
    owner_tax_id: String,
    balance: Decimal,
    variant: AccountVariant,
    ledger: Ledger,
}

impl Account {
    pub fn open(number: u32, owner_tax_id: String, variant: AccountVariant) -> Self {
        Self {
            number,
            owner_tax_id,
            balance: Decimal::ZERO,
            variant,
            ledger: Ledger::default(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn owner_tax_id(&self) -> &str {
        &self.owner_tax_id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn variant(&self) -> AccountVariant {
        self.variant
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        self.deposit_at(amount, Local::now())
    }

    /// Credits `amount` iff it is positive, recording the entry at `now`.
    pub fn deposit_at(&mut self, amount: Decimal, now: DateTime<Local>) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        self.balance += amount;
        self.ledger.record(TransactionKind::Deposit, amount, now);
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        self.withdraw_at(amount, Local::now())
    }

    /// Debits `amount` when every rule of the account's variant passes.
    ///
    /// Checking evaluates its per-withdrawal limit, then the daily cap,
    /// then the funds; savings evaluates the funds first and the daily cap
    /// last. The daily cap counts the withdrawals already recorded on
    /// `now`'s local calendar day.
    pub fn withdraw_at(&mut self, amount: Decimal, now: DateTime<Local>) -> Result<()> {
        let today = now.date_naive();
        match self.variant {
            AccountVariant::Checking { limit, daily_cap } => {
                if amount > limit {
                    return Err(Error::LimitExceeded { limit });
                }
                self.check_daily_cap(daily_cap, today)?;
                self.check_funds(amount)?;
            }
            AccountVariant::Savings { daily_cap } => {
                self.check_funds(amount)?;
                self.check_daily_cap(daily_cap, today)?;
            }
        }
        self.balance -= amount;
        self.ledger.record(TransactionKind::Withdrawal, amount, now);
        Ok(())
    }

    fn check_funds(&self, amount: Decimal) -> Result<()> {
        if amount > self.balance {
            Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            })
        } else if amount <= Decimal::ZERO {
            Err(Error::InvalidAmount)
        } else {
            Ok(())
        }
    }

    fn check_daily_cap(&self, cap: u32, day: NaiveDate) -> Result<()> {
        if self.ledger.withdrawals_on(day) >= cap as usize {
            Err(Error::DailyCapExceeded { cap })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Agency: {} No: {} - Balance: R$ {:.2}",
            self.variant.label(),
            AGENCY,
            self.number,
            self.balance
        )
    }
}
