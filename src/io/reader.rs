use crate::{
    common::{
        command::Command,
        error::{AppError, InputError},
        money::Money,
    },
    domain::{
        catalog::Catalog,
        instrument::{Instrument, SharedInstrument},
    },
};
use std::{
    io::{BufRead, Read, Write},
    str::FromStr,
};

#[derive(serde::Deserialize)]
/// Catalog CSV row. Headers: `name,symbol,price`.
struct CatalogRow {
    name: String,
    symbol: String,
    price: String,
}

/// Reads instruments from a catalog CSV reader.
///
/// Symbols are trimmed and upper-cased; prices must be positive decimals.
/// Errors carry the offending symbol.
///
/// # Examples
///
/// ```
/// use portfolio_sim::io::reader::read_instruments;
/// use csv::ReaderBuilder;
///
/// let data = "name,symbol,price\n\
/// Apple Inc.,aapl,175.50\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let instruments: Vec<_> = read_instruments(&mut rdr).collect();
///
/// let apple = instruments[0].as_ref().unwrap();
/// assert_eq!(apple.symbol(), "AAPL");
/// assert_eq!(apple.price().to_string(), "175.50");
/// ```
pub fn read_instruments<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<SharedInstrument, String>> + '_ {
    rdr.deserialize::<CatalogRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let symbol = row.symbol.trim().to_ascii_uppercase();
        let name = row.name.trim();
        if symbol.is_empty() {
            return Err(format!("missing symbol for {name:?}"));
        }

        let price = Money::from_str(&row.price)
            .map_err(|e| format!("bad price {:?} for {symbol}: {e}", row.price.trim()))?;
        if !price.is_positive() {
            return Err(format!("price for {symbol} must be positive"));
        }

        Ok(Instrument::shared(name, symbol, price))
    })
}

/// Builds a catalog from CSV, rejecting bad rows, duplicate symbols and an
/// empty file.
pub fn load_catalog<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Catalog, AppError> {
    let mut catalog = Catalog::new();
    for instrument in read_instruments(rdr) {
        catalog.insert(instrument.map_err(AppError::Catalog)?)?;
    }
    if catalog.is_empty() {
        return Err(AppError::Catalog("catalog has no instruments".into()));
    }
    Ok(catalog)
}

pub fn parse_ticker(line: &str) -> String {
    line.trim().to_ascii_uppercase()
}

pub fn parse_quantity(line: &str) -> Result<u64, InputError> {
    let n: i64 = line
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidQuantity)?;
    u64::try_from(n)
        .ok()
        .filter(|&q| q > 0)
        .ok_or(InputError::NonPositiveQuantity)
}

pub fn parse_price(line: &str) -> Result<Money, InputError> {
    let price = Money::from_str(line).map_err(|_| InputError::InvalidPrice)?;
    if !price.is_positive() {
        return Err(InputError::NonPositivePrice);
    }
    Ok(price)
}

/// Line-oriented console dialogue. Prompts go to `output`, answers come from
/// `input`. End of input reads as `None`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Runs one menu dialogue. `Ok(None)` means input ended; the inner
    /// `Err` is a rejected answer to report before the next round.
    pub fn next_command(
        &mut self,
        catalog: &Catalog,
    ) -> Result<Option<Result<Command, InputError>>, AppError> {
        match self.dialogue(catalog) {
            Ok(command) => Ok(Some(Ok(command))),
            Err(Stop::Rejected(e)) => Ok(Some(Err(e))),
            Err(Stop::Eof) => Ok(None),
            Err(Stop::Failed(e)) => Err(e),
        }
    }

    fn dialogue(&mut self, catalog: &Catalog) -> Result<Command, Stop> {
        let choice = self.answer("Choose an option: ")?;
        let command = match choice.trim() {
            "1" => Command::ListInstruments,
            "2" => {
                let symbol = self.listed_ticker("Enter the stock ticker to buy: ", catalog)?;
                let quantity = parse_quantity(&self.answer("Enter the quantity to buy: ")?)?;
                Command::Buy { symbol, quantity }
            }
            "3" => {
                let symbol = parse_ticker(&self.answer("Enter the stock ticker to sell: ")?);
                let quantity = parse_quantity(&self.answer("Enter the quantity to sell: ")?)?;
                Command::Sell { symbol, quantity }
            }
            "4" => Command::ViewPortfolio,
            "5" => Command::ViewBalance,
            "6" => Command::ViewHistory,
            "7" => {
                let symbol = self.listed_ticker("Enter the stock ticker to update: ", catalog)?;
                let price = parse_price(&self.answer("Enter the new price: ")?)?;
                Command::UpdatePrice { symbol, price }
            }
            "8" => Command::Exit,
            _ => return Err(InputError::InvalidChoice.into()),
        };
        Ok(command)
    }

    fn answer(&mut self, prompt: &str) -> Result<String, Stop> {
        self.ask(prompt)?.ok_or(Stop::Eof)
    }

    /// Ticker that must exist in the catalog.
    fn listed_ticker(&mut self, prompt: &str, catalog: &Catalog) -> Result<String, Stop> {
        let symbol = parse_ticker(&self.answer(prompt)?);
        if !catalog.contains(&symbol) {
            return Err(InputError::InvalidTicker.into());
        }
        Ok(symbol)
    }
}

/// Why a dialogue ended early.
enum Stop {
    Eof,
    Rejected(InputError),
    Failed(AppError),
}

impl From<InputError> for Stop {
    fn from(e: InputError) -> Self {
        Stop::Rejected(e)
    }
}

impl From<AppError> for Stop {
    fn from(e: AppError) -> Self {
        Stop::Failed(e)
    }
}
