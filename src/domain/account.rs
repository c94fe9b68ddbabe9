use log::info;

use crate::{
    common::{error::TradeError, money::Money},
    domain::{
        instrument::SharedInstrument,
        ledger::Ledger,
        transaction::{TransactionRecord, TxKind},
    },
};

/// A user's cash, holdings and trade history. `buy` and `sell` change all
/// three together or not at all.
#[derive(Debug)]
pub struct Account {
    username: String,
    balance: Money,
    portfolio: Ledger,
    history: Vec<TransactionRecord>,
}

impl Account {
    /// Opens an account with the default 10000.00 balance.
    pub fn new(username: impl Into<String>) -> Self {
        Self::with_balance(username, Money::from_units(10_000))
    }

    pub fn with_balance(username: impl Into<String>, balance: Money) -> Self {
        Self {
            username: username.into(),
            balance,
            portfolio: Ledger::new(),
            history: Vec::new(),
        }
    }

    pub fn buy(
        &mut self,
        instrument: &SharedInstrument,
        quantity: u64,
    ) -> Result<&TransactionRecord, TradeError> {
        let price = instrument.price();
        // A cost too large for `Money` is unaffordable by any balance.
        let cost = price
            .checked_mul(quantity)
            .filter(|cost| *cost <= self.balance)
            .ok_or_else(|| TradeError::InsufficientFunds {
                symbol: instrument.symbol().to_string(),
                quantity,
                required: price.saturating_mul(quantity),
                available: self.balance,
            })?;
        if self
            .portfolio
            .quantity_of(instrument.symbol())
            .checked_add(quantity)
            .is_none()
        {
            return Err(TradeError::Overflow {
                symbol: instrument.symbol().to_string(),
                quantity,
            });
        }

        self.balance -= cost;
        self.portfolio.add(instrument, quantity);
        info!(
            "{} bought {} {} @ {} (balance {})",
            self.username,
            quantity,
            instrument.symbol(),
            price,
            self.balance
        );
        Ok(self.record(instrument, quantity, price, TxKind::Buy))
    }

    pub fn sell(&mut self, symbol: &str, quantity: u64) -> Result<&TransactionRecord, TradeError> {
        let holding = self.portfolio.check_remove(symbol, quantity)?;
        let instrument = SharedInstrument::clone(&holding.instrument);
        let price = instrument.price();
        let balance = price
            .checked_mul(quantity)
            .and_then(|earnings| self.balance.checked_add(earnings))
            .ok_or_else(|| TradeError::Overflow {
                symbol: symbol.to_string(),
                quantity,
            })?;

        self.portfolio.remove(symbol, quantity)?;
        self.balance = balance;
        info!(
            "{} sold {} {} @ {} (balance {})",
            self.username, quantity, symbol, price, self.balance
        );
        Ok(self.record(&instrument, quantity, price, TxKind::Sell))
    }

    fn record(
        &mut self,
        instrument: &SharedInstrument,
        quantity: u64,
        price: Money,
        kind: TxKind,
    ) -> &TransactionRecord {
        self.history.push(TransactionRecord::new(
            SharedInstrument::clone(instrument),
            quantity,
            price,
            kind,
        ));
        &self.history[self.history.len() - 1]
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn portfolio(&self) -> &Ledger {
        &self.portfolio
    }

    /// Trades in execution order.
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    /// Cash plus holdings at current prices.
    pub fn net_worth(&self) -> Money {
        self.balance.saturating_add(self.portfolio.total_value())
    }
}
