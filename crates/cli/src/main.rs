//! `alloysim` command-line tool.

mod cli;
mod logging;
mod replay;

use std::process::ExitCode;

use alloysim_config::Config;
use alloysim_store::Store;
use alloysim_units::{astm_to_diameter, diameter_to_astm};
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command, ConvertFrom};
use tracing::info;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();

	let mut config = Config::discover(cli.config.as_deref()).context("loading configuration")?;
	if cli.verbose {
		config.store.trace_actions = true;
	}
	logging::setup_tracing(&config.log, cli.verbose);

	match cli.command {
		Command::Validate { table, field, value } => {
			let result = table.table().validate(&field, &value);
			info!(%table, field = %field, valid = result.is_valid(), "validated");
			println!("{}", serde_json::to_string(&result)?);
			Ok(if result.is_valid() {
				ExitCode::SUCCESS
			} else {
				ExitCode::FAILURE
			})
		}
		Command::Convert { from } => {
			let converted = match from {
				ConvertFrom::Astm { value } => astm_to_diameter(value),
				ConvertFrom::Diameter { value } => diameter_to_astm(value),
			}?;
			println!("{converted}");
			Ok(ExitCode::SUCCESS)
		}
		Command::Replay { file } => {
			let input = std::fs::read_to_string(&file)
				.with_context(|| format!("reading {}", file.display()))?;
			let actions = replay::read_actions(&input)?;

			let mut store = Store::with_config(config.store);
			replay::replay(&mut store, actions)?;
			println!("{}", serde_json::to_string_pretty(&**store.state())?);
			Ok(ExitCode::SUCCESS)
		}
	}
}
