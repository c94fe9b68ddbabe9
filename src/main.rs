use std::io::{stdin, stdout, BufWriter};

use portfolio_sim::{app, common::error::AppError};

fn main() {
    env_logger::init();

    let stdin = stdin();
    let stdout = stdout();
    let result = app::run(std::env::args(), stdin.lock(), BufWriter::new(stdout.lock()));

    match result {
        Ok(()) => {}
        // --help and --version land here too
        Err(AppError::Args(e)) => e.exit(),
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
