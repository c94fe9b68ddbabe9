use log::warn;

use crate::{
    common::{command::Command, error::TradeError, money::Money},
    worker::{
        handlers::{buy, sell, update_price},
        session::Session,
    },
};

/// Result of one command, for the writer to render. View outcomes carry no
/// data; the writer reads the session directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Instruments,
    Bought {
        name: String,
        symbol: String,
        quantity: u64,
        price: Money,
    },
    Sold {
        symbol: String,
        quantity: u64,
        price: Money,
    },
    Portfolio,
    Balance,
    History,
    PriceUpdated {
        symbol: String,
        price: Money,
    },
    Rejected(TradeError),
    Exit,
}

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(&mut self, session: &mut Session, command: Command) -> Outcome {
        let result = match command {
            Command::ListInstruments => Ok(Outcome::Instruments),
            Command::Buy { symbol, quantity } => buy::handle(session, &symbol, quantity),
            Command::Sell { symbol, quantity } => sell::handle(session, &symbol, quantity),
            Command::ViewPortfolio => Ok(Outcome::Portfolio),
            Command::ViewBalance => Ok(Outcome::Balance),
            Command::ViewHistory => Ok(Outcome::History),
            Command::UpdatePrice { symbol, price } => update_price::handle(session, &symbol, price),
            Command::Exit => Ok(Outcome::Exit),
        };

        result.unwrap_or_else(|err| {
            warn!("rejected: {err}");
            Outcome::Rejected(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{account::Account, catalog::Catalog, transaction::TxKind};

    fn session() -> Session {
        Session::new(Catalog::builtin().unwrap(), Account::new("test_user"))
    }

    #[test]
    fn views_do_not_touch_state() {
        let mut session = session();
        let mut processor = Processor::new();

        for (command, expected) in [
            (Command::ListInstruments, Outcome::Instruments),
            (Command::ViewPortfolio, Outcome::Portfolio),
            (Command::ViewBalance, Outcome::Balance),
            (Command::ViewHistory, Outcome::History),
            (Command::Exit, Outcome::Exit),
        ] {
            assert_eq!(processor.process(&mut session, command), expected);
        }
        assert_eq!(session.account.balance(), Money::from_units(10_000));
        assert!(session.account.history().is_empty());
    }

    #[test]
    fn trades_are_logged_in_call_order() {
        let mut session = session();
        let mut processor = Processor::new();

        processor.process(
            &mut session,
            Command::Buy {
                symbol: "AAPL".into(),
                quantity: 3,
            },
        );
        processor.process(
            &mut session,
            Command::Buy {
                symbol: "TSLA".into(),
                quantity: 1,
            },
        );
        processor.process(
            &mut session,
            Command::Sell {
                symbol: "AAPL".into(),
                quantity: 1,
            },
        );

        let log: Vec<(TxKind, &str, u64)> = session
            .account
            .history()
            .iter()
            .map(|r| (r.kind(), r.symbol(), r.quantity()))
            .collect();
        assert_eq!(
            log,
            [
                (TxKind::Buy, "AAPL", 3),
                (TxKind::Buy, "TSLA", 1),
                (TxKind::Sell, "AAPL", 1),
            ]
        );
    }

    #[test]
    fn failures_become_rejections() {
        let mut session = session();
        let mut processor = Processor::new();

        let outcome = processor.process(
            &mut session,
            Command::Sell {
                symbol: "AAPL".into(),
                quantity: 5,
            },
        );

        assert_eq!(
            outcome,
            Outcome::Rejected(TradeError::NotOwned {
                symbol: "AAPL".into()
            })
        );
        assert_eq!(session.account.balance(), Money::from_units(10_000));
    }

    #[test]
    fn price_update_goes_through_catalog() {
        let mut session = session();
        let mut processor = Processor::new();

        let outcome = processor.process(
            &mut session,
            Command::UpdatePrice {
                symbol: "AMZN".into(),
                price: Money::from_units(3_500),
            },
        );

        assert!(matches!(outcome, Outcome::PriceUpdated { .. }));
        assert_eq!(
            session.catalog.get("AMZN").unwrap().price(),
            Money::from_units(3_500)
        );
    }
}
