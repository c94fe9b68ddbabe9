use std::{collections::HashMap, rc::Rc};

use crate::{
    common::{error::AppError, money::Money},
    domain::instrument::{Instrument, SharedInstrument},
};

/// The fixed set of tradable instruments for one run. Owns every instrument;
/// everything else holds `Rc` clones.
#[derive(Debug, Default)]
pub struct Catalog {
    instruments: Vec<SharedInstrument>,
    by_symbol: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            instruments: Vec::new(),
            by_symbol: HashMap::new(),
        }
    }

    /// Apple, Alphabet, Tesla and Amazon at their starting prices, in cents.
    pub fn builtin() -> Result<Self, AppError> {
        let mut catalog = Self::new();
        for (name, symbol, cents) in [
            ("Apple Inc.", "AAPL", 175_50),
            ("Alphabet Inc.", "GOOGL", 2800_00),
            ("Tesla Inc.", "TSLA", 750_25),
            ("Amazon Inc.", "AMZN", 3400_00),
        ] {
            catalog.insert(Instrument::shared(name, symbol, Money::from_cents(cents)))?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, instrument: SharedInstrument) -> Result<(), AppError> {
        let symbol = instrument.symbol().to_string();
        if self.by_symbol.contains_key(&symbol) {
            return Err(AppError::Catalog(format!("duplicate symbol {symbol}")));
        }
        self.by_symbol.insert(symbol, self.instruments.len());
        self.instruments.push(instrument);
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<&SharedInstrument> {
        self.by_symbol.get(symbol).map(|&i| &self.instruments[i])
    }

    /// Returns a new handle to the instrument, for storing alongside a position.
    pub fn lookup(&self, symbol: &str) -> Option<SharedInstrument> {
        self.get(symbol).map(Rc::clone)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    /// Instruments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SharedInstrument> + '_ {
        self.instruments.iter()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn builtin_has_reference_instruments_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let symbols: Vec<&str> = catalog.iter().map(|i| i.symbol()).collect();
        assert_eq!(symbols, ["AAPL", "GOOGL", "TSLA", "AMZN"]);

        let tsla = catalog.get("TSLA").unwrap();
        assert_eq!(tsla.name(), "Tesla Inc.");
        assert_eq!(tsla.price(), Money::from_str("750.25").unwrap());
        assert_eq!(catalog.get("GOOGL").unwrap().price(), Money::from_str("2800").unwrap());
        assert_eq!(catalog.get("AAPL").unwrap().price(), Money::from_str("175.50").unwrap());
        assert_eq!(catalog.get("AMZN").unwrap().price(), Money::from_str("3400.00").unwrap());
    }

    #[test]
    fn insert_rejects_duplicate_symbol() {
        let mut catalog = Catalog::new();
        catalog
            .insert(Instrument::shared("Apple Inc.", "AAPL", Money::from_units(150)))
            .unwrap();
        let err = catalog
            .insert(Instrument::shared("Other Apple", "AAPL", Money::from_units(1)))
            .unwrap_err();

        assert!(matches!(err, AppError::Catalog(msg) if msg.contains("AAPL")));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("AAPL").unwrap().name(), "Apple Inc.");
    }

    #[test]
    fn lookup_shares_the_catalog_instance() {
        let catalog = Catalog::builtin().unwrap();
        let handle = catalog.lookup("AAPL").unwrap();
        handle.update_price(Money::from_units(200));

        assert_eq!(catalog.get("AAPL").unwrap().price(), Money::from_units(200));
        assert!(Rc::ptr_eq(&handle, catalog.get("AAPL").unwrap()));
    }

    #[test]
    fn unknown_symbol_is_absent() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get("MSFT").is_none());
        assert!(!catalog.contains("aapl"));
        assert!(catalog.contains("AAPL"));
    }
}
