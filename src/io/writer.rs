use std::io::{self, Write};

use crate::{
    common::error::{InputError, TradeError},
    domain::{account::Account, catalog::Catalog, ledger::Ledger},
    worker::{processor::Outcome, session::Session},
};

pub const MENU: [&str; 8] = [
    "View Available Stocks",
    "Buy Stock",
    "Sell Stock",
    "View Portfolio",
    "View Balance",
    "View Transaction History",
    "Update Stock Prices",
    "Exit",
];

pub fn write_welcome<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "Welcome to the Stock Market Management System!")
}

pub fn write_menu<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "\nMenu:")?;
    for (i, entry) in MENU.iter().enumerate() {
        writeln!(w, "{}. {}", i + 1, entry)?;
    }
    Ok(())
}

/// Renders the result of one processed command.
///
/// View outcomes are drawn from the current session state, so a listing
/// always reflects the latest prices.
///
/// # Examples
///
/// ```
/// use portfolio_sim::domain::{account::Account, catalog::Catalog};
/// use portfolio_sim::io::writer::write_outcome;
/// use portfolio_sim::worker::{processor::Outcome, session::Session};
///
/// let session = Session::new(Catalog::builtin().unwrap(), Account::new("alice"));
/// let mut out = Vec::new();
/// write_outcome(&mut out, &session, &Outcome::Balance).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Current Balance: $10000.00\nNet Worth: $10000.00\n"
/// );
/// ```
pub fn write_outcome<W: Write>(w: &mut W, session: &Session, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Instruments => write_instruments(w, &session.catalog),
        Outcome::Bought {
            name,
            symbol,
            quantity,
            ..
        } => writeln!(w, "Bought {quantity} shares of {name} ({symbol})."),
        Outcome::Sold {
            symbol, quantity, ..
        } => writeln!(w, "Sold {quantity} shares of {symbol}."),
        Outcome::Portfolio => write_portfolio(w, session.account.portfolio()),
        Outcome::Balance => write_balance(w, &session.account),
        Outcome::History => write_history(w, &session.account),
        Outcome::PriceUpdated { symbol, price } => {
            writeln!(w, "Updated {symbol} price to ${price}")
        }
        Outcome::Rejected(err) => write_rejection(w, &session.catalog, err),
        Outcome::Exit => writeln!(w, "Exiting the system. Goodbye!"),
    }
}

pub fn write_instruments<W: Write>(w: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(w, "\nAvailable Stocks:")?;
    for instrument in catalog.iter() {
        writeln!(w, "{instrument}")?;
    }
    Ok(())
}

pub fn write_portfolio<W: Write>(w: &mut W, ledger: &Ledger) -> io::Result<()> {
    if ledger.is_empty() {
        return writeln!(w, "Portfolio is empty.");
    }

    writeln!(w, "\nPortfolio:")?;
    for p in ledger.view() {
        writeln!(
            w,
            "{} ({}) - {} shares @ ${} each, Total Value: ${}",
            p.instrument.name(),
            p.symbol,
            p.quantity,
            p.instrument.price(),
            p.value
        )?;
    }
    writeln!(w)
}

/// Cash, then cash plus holdings at current prices.
pub fn write_balance<W: Write>(w: &mut W, account: &Account) -> io::Result<()> {
    writeln!(w, "Current Balance: ${}", account.balance())?;
    writeln!(w, "Net Worth: ${}", account.net_worth())
}

pub fn write_history<W: Write>(w: &mut W, account: &Account) -> io::Result<()> {
    if account.history().is_empty() {
        return writeln!(w, "No transactions yet.");
    }

    writeln!(w, "\nTransaction History:")?;
    for record in account.history() {
        writeln!(w, "{record}")?;
    }
    writeln!(w)
}

pub fn write_rejection<W: Write>(w: &mut W, catalog: &Catalog, err: &TradeError) -> io::Result<()> {
    match err {
        TradeError::UnknownSymbol { .. } => writeln!(w, "{}", InputError::InvalidTicker),
        TradeError::NotOwned { symbol } => {
            writeln!(w, "You do not own any shares of {symbol}.")
        }
        TradeError::InsufficientFunds {
            symbol, quantity, ..
        } => match catalog.get(symbol) {
            Some(instrument) => writeln!(
                w,
                "Insufficient balance to buy {quantity} shares of {} ({symbol}).",
                instrument.name()
            ),
            None => writeln!(w, "Insufficient balance to buy {quantity} shares of {symbol}."),
        },
        TradeError::InsufficientShares { held, .. } => {
            writeln!(w, "Not enough shares to sell. You own {held} shares.")
        }
        TradeError::Overflow { symbol, quantity } => {
            writeln!(w, "Trade too large: {quantity} shares of {symbol}.")
        }
    }
}

pub fn write_input_error<W: Write>(w: &mut W, err: InputError) -> io::Result<()> {
    writeln!(w, "{err}")
}
