use crate::common::money::Money;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid arguments: {0}")]
    Args(#[from] clap::Error),
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog error: {0}")]
    Catalog(String),
    #[error("config error: {0}")]
    Config(String),
}

/// Rejected console input. Caught by the reader, never reaches the account.
/// The messages are shown to the user verbatim.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid choice. Please try again.")]
    InvalidChoice,
    #[error("Invalid stock ticker.")]
    InvalidTicker,
    #[error("Invalid quantity.")]
    InvalidQuantity,
    #[error("Quantity must be greater than zero.")]
    NonPositiveQuantity,
    #[error("Invalid price.")]
    InvalidPrice,
    #[error("Price must be greater than zero.")]
    NonPositivePrice,
}

/// Expected, recoverable trading conditions. Each aborts only the operation
/// that produced it and leaves the account untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeError {
    #[error("unknown symbol {symbol}")]
    UnknownSymbol { symbol: String },
    #[error("no shares of {symbol} owned")]
    NotOwned { symbol: String },
    #[error("insufficient balance for {quantity} shares of {symbol}: cost {required}, available {available}")]
    InsufficientFunds {
        symbol: String,
        quantity: u64,
        required: Money,
        available: Money,
    },
    #[error("not enough shares of {symbol}: requested {requested}, held {held}")]
    InsufficientShares {
        symbol: String,
        requested: u64,
        held: u64,
    },
    #[error("{quantity} shares of {symbol} exceed the account's numeric limits")]
    Overflow { symbol: String, quantity: u64 },
}
