use std::collections::BTreeMap;

use log::debug;

use crate::{
    common::{error::TradeError, money::Money},
    domain::instrument::SharedInstrument,
};

/// One owned position. `quantity` is never zero while stored in a `Ledger`.
#[derive(Debug, Clone)]
pub struct Holding {
    pub instrument: SharedInstrument,
    pub quantity: u64,
}

/// Read-only view of a holding, valued at the instrument's current price.
#[derive(Debug, Clone)]
pub struct Position<'a> {
    pub symbol: &'a str,
    pub instrument: &'a SharedInstrument,
    pub quantity: u64,
    pub value: Money,
}

/// Holdings of one account, keyed by symbol.
#[derive(Debug, Default)]
pub struct Ledger {
    holdings: BTreeMap<String, Holding>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            holdings: BTreeMap::new(),
        }
    }

    /// Adds shares to the position for `instrument`, opening it if needed.
    /// Cash is not considered here. Adding zero shares is a no-op, and the
    /// held count saturates at `u64::MAX`.
    pub fn add(&mut self, instrument: &SharedInstrument, quantity: u64) {
        if quantity == 0 {
            return;
        }
        let holding = self
            .holdings
            .entry(instrument.symbol().to_string())
            .or_insert_with(|| Holding {
                instrument: SharedInstrument::clone(instrument),
                quantity: 0,
            });
        holding.quantity = holding.quantity.saturating_add(quantity);
        debug!(
            "ledger add {} x{} -> {}",
            instrument.symbol(),
            quantity,
            holding.quantity
        );
    }

    /// Checks that `quantity` shares of `symbol` can be removed and returns
    /// the holding they would come from. Never mutates.
    pub fn check_remove(&self, symbol: &str, quantity: u64) -> Result<&Holding, TradeError> {
        let holding = self
            .holdings
            .get(symbol)
            .ok_or_else(|| TradeError::NotOwned {
                symbol: symbol.to_string(),
            })?;
        if quantity > holding.quantity {
            return Err(TradeError::InsufficientShares {
                symbol: symbol.to_string(),
                requested: quantity,
                held: holding.quantity,
            });
        }
        Ok(holding)
    }

    /// Removes shares; a position that reaches zero is dropped. On error the
    /// ledger is unchanged.
    pub fn remove(&mut self, symbol: &str, quantity: u64) -> Result<(), TradeError> {
        let remaining = self.check_remove(symbol, quantity)?.quantity - quantity;
        if remaining == 0 {
            self.holdings.remove(symbol);
        } else if let Some(h) = self.holdings.get_mut(symbol) {
            h.quantity = remaining;
        }
        debug!("ledger remove {symbol} x{quantity} -> {remaining}");
        Ok(())
    }

    /// Positions ordered by symbol, valued at current prices. Each call
    /// derives a fresh iterator from the current state. Values too large for
    /// `Money` are clamped.
    pub fn view(&self) -> impl Iterator<Item = Position<'_>> + '_ {
        self.holdings.iter().map(|(symbol, h)| Position {
            symbol,
            instrument: &h.instrument,
            quantity: h.quantity,
            value: h.instrument.price().saturating_mul(h.quantity),
        })
    }

    pub fn total_value(&self) -> Money {
        self.view().map(|p| p.value).sum()
    }

    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.get(symbol)
    }

    pub fn quantity_of(&self, symbol: &str) -> u64 {
        self.holdings.get(symbol).map_or(0, |h| h.quantity)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.holdings.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
