use clap::Parser;
use schema_rename::{log_status, rewrite, Result};
use std::io::{self, Read, Write};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "schema-rename")]
#[command(version = VERSION)]
#[command(about = "Rename household/store vocabulary to space/supplier in a SQL dump (stdin -> stdout)")]
struct Cli {}

fn main() -> std::process::ExitCode {
    let _cli = Cli::parse();

    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error[{}]: {}", err.code(), err);
            std::process::ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let result = rewrite::apply(&input);
    log_status!(
        "rewrite",
        "{} of {} rules fired",
        result.rules_fired,
        result.rules_total
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(result.text.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
