mod calculate_cmd;
mod cli;
mod config;
mod config_cmd;
mod convert;
mod dates_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command, ConfigCommand, DatesCommand};
use crate::config::TaharaConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // `config init` must work even when the existing file does not parse.
    if let Command::Config(ConfigCommand::Init { force }) = cli.command {
        return config_cmd::init(&cli.config, force);
    }

    let config = TaharaConfig::load(&cli.config)?;
    match cli.command {
        Command::Calculate(args) => calculate_cmd::run(args, &config),
        Command::Dates(DatesCommand::Add {
            file,
            date,
            qualifier,
        }) => dates_cmd::add(&file, &date, &qualifier),
        Command::Dates(DatesCommand::List { file }) => dates_cmd::list(file, &config),
        Command::Dates(DatesCommand::Convert { date, qualifier }) => {
            dates_cmd::convert(&date, qualifier.as_deref())
        }
        Command::Config(ConfigCommand::Show) => config_cmd::show(&config),
        Command::Config(ConfigCommand::Init { force }) => config_cmd::init(&cli.config, force),
    }
}
