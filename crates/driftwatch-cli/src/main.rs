use std::process::ExitCode;

use clap::Parser;

use driftwatch_cli::{describe_error, execute, Cli};

fn main() -> ExitCode {
    driftwatch_core::tracing::init_tracing();
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", describe_error(&e));
            ExitCode::FAILURE
        }
    }
}
