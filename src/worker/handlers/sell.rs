use crate::{
    common::error::TradeError,
    worker::{processor::Outcome, session::Session},
};

/// Sells from the account's holdings. The catalog is not consulted: anything
/// held can be sold.
pub fn handle(session: &mut Session, symbol: &str, quantity: u64) -> Result<Outcome, TradeError> {
    let rec = session.account.sell(symbol, quantity)?;
    Ok(Outcome::Sold {
        symbol: rec.symbol().to_string(),
        quantity: rec.quantity(),
        price: rec.price(),
    })
}
