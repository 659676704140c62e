use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("the amount must be greater than zero")]
    InvalidAmount,
    #[error("insufficient balance: tried to withdraw R$ {requested:.2} with R$ {available:.2} available")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("the maximum amount per withdrawal is R$ {limit:.2}")]
    LimitExceeded { limit: Decimal },
    #[error("daily limit of {cap} withdrawals reached")]
    DailyCapExceeded { cap: u32 },
    #[error("no customer registered under tax id {tax_id}")]
    CustomerNotFound { tax_id: String },
    #[error("no such account for this customer")]
    AccountNotFound,
    #[error("a customer with tax id {tax_id} is already registered")]
    DuplicateTaxId { tax_id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
