use std::{cell::Cell, fmt, rc::Rc};

use crate::common::money::Money;

/// Handle shared by the catalog, ledger entries and transaction records.
/// A price update through any handle is seen by all of them.
pub type SharedInstrument = Rc<Instrument>;

/// One tradable stock. Name and symbol are fixed at creation; only the price
/// changes.
#[derive(Debug)]
pub struct Instrument {
    name: String,
    symbol: String,
    price: Cell<Money>,
}

impl Instrument {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            price: Cell::new(price),
        }
    }

    pub fn shared(name: impl Into<String>, symbol: impl Into<String>, price: Money) -> SharedInstrument {
        Rc::new(Self::new(name, symbol, price))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn price(&self) -> Money {
        self.price.get()
    }

    /// Replaces the price unconditionally. Callers reject non-positive prices.
    pub fn update_price(&self, new_price: Money) {
        self.price.set(new_price);
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): ${}", self.name, self.symbol, self.price())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn creation_keeps_fields() {
        let apple = Instrument::new("Apple Inc.", "AAPL", Money::from_str("150.00").unwrap());
        assert_eq!(apple.name(), "Apple Inc.");
        assert_eq!(apple.symbol(), "AAPL");
        assert_eq!(apple.price(), Money::from_str("150").unwrap());
    }

    #[test]
    fn update_price_replaces_value() {
        let apple = Instrument::new("Apple Inc.", "AAPL", Money::from_str("150.00").unwrap());
        apple.update_price(Money::from_str("175.00").unwrap());
        assert_eq!(apple.price(), Money::from_str("175").unwrap());
    }

    #[test]
    fn update_is_visible_through_every_handle() {
        let catalog_handle = Instrument::shared("Tesla Inc.", "TSLA", Money::from_str("750.25").unwrap());
        let ledger_handle = Rc::clone(&catalog_handle);

        catalog_handle.update_price(Money::from_str("800").unwrap());

        assert_eq!(ledger_handle.price(), Money::from_str("800").unwrap());
    }

    #[test]
    fn display_matches_listing_format() {
        let amzn = Instrument::new("Amazon Inc.", "AMZN", Money::from_str("3400").unwrap());
        assert_eq!(amzn.to_string(), "Amazon Inc. (AMZN): $3400.00");
    }
}
