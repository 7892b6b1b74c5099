//! cinerec - item-based movie rating predictor
//!
//! Usage:
//!   cinerec evaluate                          # Defaults from the working directory
//!   cinerec evaluate --config cinerec.toml    # Paths and tuning from a file
//!   cinerec evaluate --test held_out.csv --parallel
//!   cinerec predict --user 1 --movie 4        # One prediction and its source

use std::process::ExitCode;

use cinerec_cli::{error_code, run, Cli};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error [{}]: {e:#}", error_code(&e));
            ExitCode::FAILURE
        }
    }
}
