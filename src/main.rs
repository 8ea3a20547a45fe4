mod classify_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod mle_cmd;
mod regress_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::NearfitConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = NearfitConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Classify(args) => classify_cmd::run(args, &config),
        Command::Regress(args) => regress_cmd::run(args, &config),
        Command::Mle(args) => mle_cmd::run(args, &config),
    }
}
