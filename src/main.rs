mod app;
mod cli;
mod config;
mod consts;
mod core;
mod data;
mod error;
mod geometry;
mod output;
mod utils;

use clap::Parser;

use crate::app::{CommandContext, run_command};
use crate::cli::Cli;
use crate::config::Config;
use crate::core::CategoryFilter;
use crate::data::load_store;
use crate::error::AppError;
use crate::output::Labels;
use crate::utils::{Timezone, init_logging, set_debug};

fn run(cli: Cli) -> Result<(), AppError> {
    let category = match cli.category.as_deref() {
        Some(raw) => raw.parse::<CategoryFilter>()?,
        None => CategoryFilter::All,
    };
    let labels = Labels::from_locale(cli.locale.as_deref())?;
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let store = load_store(cli.data.as_deref())?;

    let command = cli.command.clone().unwrap_or_default();
    let ctx = CommandContext {
        store: &store,
        cli: &cli,
        category,
        labels,
        current_year: timezone.current_year(),
    };
    run_command(&command, &ctx)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let cli = if cli.no_config {
        cli
    } else {
        let cli = cli.with_config(&Config::load());
        set_debug(cli.debug);
        cli
    };

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
