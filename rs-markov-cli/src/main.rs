use std::process::ExitCode;

use clap::Parser;

use rs_markov_cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG, when set, wins over -v
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("Terminating program");
            ExitCode::FAILURE
        }
    }
}
