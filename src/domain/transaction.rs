use std::fmt;

use chrono::{DateTime, Local};

use crate::{common::money::Money, domain::instrument::SharedInstrument};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct TransactionRecord {
    instrument: SharedInstrument,
    quantity: u64,
    /// Price per share when the trade executed; later price updates don't touch it.
    price: Money,
    kind: TxKind,
    executed_at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Buy,
    Sell,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Buy => f.write_str("BUY"),
            TxKind::Sell => f.write_str("SELL"),
        }
    }
}

impl TransactionRecord {
    /// Stamps the record with the current local time.
    pub fn new(instrument: SharedInstrument, quantity: u64, price: Money, kind: TxKind) -> Self {
        Self::at(instrument, quantity, price, kind, Local::now())
    }

    pub fn at(
        instrument: SharedInstrument,
        quantity: u64,
        price: Money,
        kind: TxKind,
        executed_at: DateTime<Local>,
    ) -> Self {
        Self {
            instrument,
            quantity,
            price,
            kind,
            executed_at,
        }
    }

    pub fn instrument(&self) -> &SharedInstrument {
        &self.instrument
    }

    pub fn symbol(&self) -> &str {
        self.instrument.symbol()
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn kind(&self) -> TxKind {
        self.kind
    }

}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} shares of {} @ ${}",
            self.executed_at.format(TIMESTAMP_FORMAT),
            self.kind,
            self.quantity,
            self.symbol(),
            self.price
        )
    }
}
