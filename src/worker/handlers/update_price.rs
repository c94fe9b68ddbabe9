use log::info;

use crate::{
    common::{error::TradeError, money::Money},
    worker::{processor::Outcome, session::Session},
};

pub fn handle(session: &mut Session, symbol: &str, price: Money) -> Result<Outcome, TradeError> {
    let instrument = session
        .catalog
        .get(symbol)
        .ok_or_else(|| TradeError::UnknownSymbol {
            symbol: symbol.to_string(),
        })?;

    let old = instrument.price();
    instrument.update_price(price);
    info!("{symbol} price {old} -> {price}");

    Ok(Outcome::PriceUpdated {
        symbol: symbol.to_string(),
        price,
    })
}
