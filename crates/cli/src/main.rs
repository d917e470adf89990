//! tensornote CLI: inspect and produce tensor notation from the shell.
//!
//! - `tensornote inspect [FILE|-] [--json] [--strict]`: parse and summarize
//! - `tensornote encode --input NAME:DIMS:VALUES ...`: print canonical notation
//!
//! Log output goes to stderr, filtered by `TENSORNOTE_LOG` (default `warn`).

mod commands;
mod encode;
mod format;
mod input;
mod inspect;

use std::process;

use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::OutputMode;

const LOG_ENV: &str = "TENSORNOTE_LOG";

fn main() {
    init_logging();

    let matches = build_cli().get_matches();

    let exit_code = match run(&matches) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("(error) {:#}", e);
            1
        }
    };
    process::exit(exit_code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("inspect", m)) => {
            let mode = if m.get_flag("json") {
                OutputMode::Json
            } else {
                OutputMode::Human
            };
            let path = m.get_one::<String>("file").map(|s| s.as_str());
            inspect::run(path, m.get_flag("strict"), mode)
        }
        Some(("encode", m)) => {
            let args: Vec<&str> = m
                .get_many::<String>("input")
                .map(|vals| vals.map(|s| s.as_str()).collect())
                .unwrap_or_default();
            encode::run(&args)
        }
        Some((other, _)) => anyhow::bail!("Unknown command: {}", other),
        None => anyhow::bail!("No command provided"),
    }
}
