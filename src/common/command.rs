use crate::common::money::Money;

/// A validated user request sent from the console reader to the processor.
/// Symbols are already upper-cased, quantities and prices already positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListInstruments,
    Buy { symbol: String, quantity: u64 },
    Sell { symbol: String, quantity: u64 },
    ViewPortfolio,
    ViewBalance,
    ViewHistory,
    UpdatePrice { symbol: String, price: Money },
    Exit,
}
