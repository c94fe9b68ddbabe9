use std::path::PathBuf;

use clap::Parser;

use crate::common::{error::AppError, money::Money};

pub const DEFAULT_BALANCE: &str = "10000.00";

/// Command line of the `portfolio-sim` binary.
#[derive(Parser, Debug)]
#[command(name = "portfolio-sim")]
#[command(about = "Simulated single-user stock portfolio", long_about = None)]
pub struct Cli {
    /// CSV file with `name,symbol,price` rows replacing the built-in catalog.
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Starting cash balance.
    #[arg(short, long, default_value = DEFAULT_BALANCE)]
    pub balance: String,

    /// Username; prompted for when omitted.
    #[arg(short, long)]
    pub user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub initial_balance: Money,
    pub username: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            initial_balance: Money::from_units(10_000),
            username: None,
        }
    }
}

impl Config {
    pub fn from_args<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
        let cli = Cli::try_parse_from(args)?;
        Self::try_from(cli)
    }
}

impl TryFrom<Cli> for Config {
    type Error = AppError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let initial_balance: Money = cli
            .balance
            .parse()
            .map_err(|e| AppError::Config(format!("balance {:?}: {e}", cli.balance)))?;
        if initial_balance.is_negative() {
            return Err(AppError::Config(format!(
                "balance must not be negative, got {}",
                cli.balance
            )));
        }

        let username = cli
            .user
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        Ok(Self {
            catalog_path: cli.catalog,
            initial_balance,
            username,
        })
    }
}
