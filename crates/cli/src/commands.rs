//! Clap command tree for the `tensornote` binary.

use clap::{Arg, ArgAction, Command};

/// Build the top-level command.
pub fn build_cli() -> Command {
    Command::new("tensornote")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and encode tensor notation feature strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(inspect_command())
        .subcommand(encode_command())
}

fn inspect_command() -> Command {
    Command::new("inspect")
        .about("Parse tensor notation and list its inputs")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("File to read; '-' or nothing reads stdin"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print JSON instead of a table"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Reject content after the closing '}'"),
        )
}

fn encode_command() -> Command {
    Command::new("encode")
        .about("Encode typed inputs as canonical tensor notation")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("NAME:DIMS:VALUES")
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .help("Input as name, comma-separated dims and comma-separated values (e.g. x:1,3:0.1,0.2,0.3)"),
        )
}
