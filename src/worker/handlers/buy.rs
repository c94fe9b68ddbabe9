use crate::{
    common::error::TradeError,
    worker::{processor::Outcome, session::Session},
};

pub fn handle(session: &mut Session, symbol: &str, quantity: u64) -> Result<Outcome, TradeError> {
    // only catalog instruments can be bought
    let instrument = session
        .catalog
        .lookup(symbol)
        .ok_or_else(|| TradeError::UnknownSymbol {
            symbol: symbol.to_string(),
        })?;

    let rec = session.account.buy(&instrument, quantity)?;
    Ok(Outcome::Bought {
        name: instrument.name().to_string(),
        symbol: rec.symbol().to_string(),
        quantity: rec.quantity(),
        price: rec.price(),
    })
}
