use std::io::{BufRead, Write};

use log::info;

use crate::{
    common::{config::Config, error::AppError},
    domain::{account::Account, catalog::Catalog},
    io::{
        reader::{self, Prompter},
        writer,
    },
    worker::{
        processor::{Outcome, Processor},
        session::Session,
    },
};

/// Parses `args`, then runs the interactive session over `input`/`output`.
pub fn run<I, S, R, W>(args: I, input: R, output: W) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    R: BufRead,
    W: Write,
{
    let config = Config::from_args(args)?;
    run_with_config(&config, input, output)
}

pub fn run_with_config<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: W,
) -> Result<(), AppError> {
    let catalog = load_catalog(config)?;
    info!("catalog ready with {} instruments", catalog.len());

    let mut prompter = Prompter::new(input, output);
    writer::write_welcome(prompter.output())?;

    let username = match &config.username {
        Some(name) => name.clone(),
        None => match prompter.ask("Enter your username: ")? {
            Some(name) => name.trim().to_string(),
            None => return Ok(()),
        },
    };

    let account = Account::with_balance(username, config.initial_balance);
    let mut session = Session::new(catalog, account);
    run_session(&mut session, &mut prompter)
}

/// The menu loop. Returns on the exit choice or when input ends.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    let mut processor = Processor::new();

    loop {
        writer::write_menu(prompter.output())?;
        let command = match prompter.next_command(&session.catalog)? {
            Some(Ok(command)) => command,
            Some(Err(rejected)) => {
                writer::write_input_error(prompter.output(), rejected)?;
                continue;
            }
            None => break,
        };

        let outcome = processor.process(session, command);
        writer::write_outcome(prompter.output(), session, &outcome)?;
        if outcome == Outcome::Exit {
            break;
        }
    }

    prompter.output().flush()?;
    info!(
        "session for {} closed with balance {}",
        session.account.username(),
        session.account.balance()
    );
    Ok(())
}

fn load_catalog(config: &Config) -> Result<Catalog, AppError> {
    let Some(path) = &config.catalog_path else {
        return Catalog::builtin();
    };

    info!("loading catalog from {}", path.display());
    let file = std::fs::File::open(path)
        .map_err(|e| AppError::Catalog(format!("cannot open {}: {e}", path.display())))?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    reader::load_catalog(&mut rdr)
}
